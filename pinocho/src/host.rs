use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use display::Display;
use pinocho_core::{FrameBuffer, Input, KeyCode, Output};

use crate::beeper::Beeper;
use crate::keymap::keymap;

/// # Held keys
/// Reduces keyboard events to the single key reported to the machine.
///
/// A press is reported at least once even if its release arrives before the next poll.
/// Releasing a key falls back to the most recently pressed key still down.
#[derive(Debug, Default)]
struct HeldKeys {
    down: Vec<KeyCode>,
    latched: Option<KeyCode>,
}

impl HeldKeys {
    fn press(&mut self, key: KeyCode) {
        self.down.retain(|&k| k != key);
        self.down.push(key);
        self.latched = Some(key);
    }

    fn release(&mut self, key: KeyCode) {
        self.down.retain(|&k| k != key);
    }

    fn poll(&mut self) -> Option<KeyCode> {
        self.latched.take().or_else(|| self.down.last().copied())
    }
}

/// Keyboard and window events
pub struct SdlInput {
    events: EventPump,
    keys: HeldKeys,
    quit: bool,
}

impl SdlInput {
    pub fn new(events: EventPump) -> Self {
        SdlInput {
            events,
            keys: HeldKeys::default(),
            quit: false,
        }
    }

    fn drain(&mut self) {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(kc) = keymap(key) {
                        self.keys.press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        self.keys.release(kc);
                    }
                }
                _ => continue,
            }
        }
    }
}

impl Input for SdlInput {
    fn poll_key(&mut self) -> Option<KeyCode> {
        self.keys.poll()
    }

    fn poll_quit(&mut self) -> bool {
        self.drain();
        self.quit
    }
}

/// The window and the speaker
pub struct SdlOutput {
    display: Display,
    beeper: Beeper,
}

impl SdlOutput {
    pub fn new(display: Display, beeper: Beeper) -> Self {
        SdlOutput { display, beeper }
    }
}

impl Output for SdlOutput {
    fn present(&mut self, frame: &FrameBuffer) {
        if let Err(e) = self.display.render(frame) {
            log::error!("failed to render frame: {}", e);
        }
    }

    fn set_tone(&mut self, on: bool) {
        self.beeper.set_tone(on);
    }
}
