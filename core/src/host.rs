//! The seams between the machine and whatever platform is driving it.

use crate::display_buffer::FrameBuffer;
use crate::keypad::KeyCode;

/// A source of keypad input
pub trait Input {
    /// The keypad key currently held down, if any
    fn poll_key(&mut self) -> Option<KeyCode>;

    /// Whether the user has asked to stop
    fn poll_quit(&mut self) -> bool;
}

/// Somewhere to show frames and play the tone
pub trait Output {
    /// Called only when the screen changed
    fn present(&mut self, frame: &FrameBuffer);

    /// Called after every batch of cycles with whether the sound timer is running
    fn set_tone(&mut self, on: bool);
}
