use std::time::Duration;

use crate::chip8::{Chip8, Step};
use crate::config::Config;
use crate::error::MachineError;
use crate::host::{Input, Output};
use crate::keypad::KeyCode;
use crate::timers::Cadence;

/// The most wall-clock time a single `advance` will catch up on
pub const MAX_CATCH_UP: Duration = Duration::from_millis(100);

/// Whether the host should keep calling `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// # Runner
/// Drives a `Chip8` from wall-clock time.
///
/// The CPU and the timers run on separate cadences. Input is polled before every cycle
/// so quitting and key presses are seen at cycle boundaries, including while the
/// program waits for a key.
pub struct Runner {
    chip8: Chip8,
    cpu: Cadence,
    timers: Cadence,
    held: Option<KeyCode>,
}

impl Runner {
    /// # Arguments
    /// * `chip8` a machine with its program already loaded
    /// * `clock_speed` instructions per second
    /// * `timer_hz` timer decrements per second
    pub fn new(chip8: Chip8, clock_speed: u32, timer_hz: u32) -> Self {
        Runner {
            chip8,
            cpu: Cadence::new(clock_speed),
            timers: Cadence::new(timer_hz),
            held: None,
        }
    }

    pub fn from_config(chip8: Chip8, config: &Config) -> Self {
        Self::new(chip8, config.clock_speed, config.timer_hz)
    }

    pub fn chip8(&self) -> &Chip8 {
        &self.chip8
    }

    pub fn chip8_mut(&mut self) -> &mut Chip8 {
        &mut self.chip8
    }

    /// How long the host can wait before calling `advance` again
    pub fn timer_period(&self) -> Duration {
        self.timers.period()
    }

    /// Runs the cycles and timer ticks that fall due in `elapsed`, then hands the
    /// screen and tone to `output`.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        input: &mut impl Input,
        output: &mut impl Output,
    ) -> Result<Flow, MachineError> {
        let elapsed = elapsed.min(MAX_CATCH_UP);

        let mut cycles = self.cpu.advance(elapsed);
        loop {
            if input.poll_quit() {
                return Ok(Flow::Quit);
            }
            self.sync_key(input.poll_key());
            if cycles == 0 {
                break;
            }
            cycles -= 1;
            if self.chip8.step()? == Step::AwaitingKey {
                break;
            }
        }

        for _ in 0..self.timers.advance(elapsed) {
            self.chip8.tick_timers();
        }

        output.set_tone(self.chip8.sound_active());
        if let Some(frame) = self.chip8.take_frame() {
            output.present(&frame);
        }
        Ok(Flow::Continue)
    }

    fn sync_key(&mut self, key: Option<KeyCode>) {
        if key == self.held {
            return;
        }
        if let Some(old) = self.held {
            self.chip8.key_release(old);
        }
        if let Some(new) = key {
            self.chip8.key_press(new);
        }
        self.held = key;
    }
}
