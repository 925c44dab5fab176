use std::fmt;

use crate::constants::KEY_COUNT;

/// One of the 16 keys on the hexadecimal keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(u8);

impl KeyCode {
    /// Returns None unless `value` is in 0x0..=0xF
    pub fn new(value: u8) -> Option<KeyCode> {
        if (value as usize) < KEY_COUNT {
            Some(KeyCode(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// # Keypad
/// Tracks which keys are held, plus the most recent press so that a program waiting
/// for input sees presses rather than keys that were already down.
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    latest: Option<KeyCode>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed[key.0 as usize] = true;
        self.latest = Some(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed[key.0 as usize] = false;
    }

    /// Whether the key with this value is down; values above 0xF are never down
    pub fn is_pressed(&self, value: u8) -> bool {
        self.pressed.get(value as usize).copied().unwrap_or(false)
    }

    /// Consumes the most recent press
    pub fn take_press(&mut self) -> Option<KeyCode> {
        self.latest.take()
    }

    /// Forgets presses made so far
    pub fn clear_press(&mut self) {
        self.latest = None;
    }
}
