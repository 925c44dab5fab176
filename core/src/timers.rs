use std::time::Duration;

/// Selects one of the two hardware timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Delay,
    Sound,
}

/// # Timers
/// Two 8-bit down-counters.
/// - both are decremented once per tick until they reach 0
/// - a non-zero sound timer means a tone should be playing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, timer: Timer) -> u8 {
        match timer {
            Timer::Delay => self.delay,
            Timer::Sound => self.sound,
        }
    }

    pub fn set(&mut self, timer: Timer, value: u8) {
        match timer {
            Timer::Delay => self.delay = value,
            Timer::Sound => self.sound = value,
        }
    }

    /// Decrements each non-zero counter
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn is_sound_active(&self) -> bool {
        self.sound != 0
    }
}

/// # Cadence
/// Converts elapsed wall-clock time into a whole number of events at a fixed rate.
///
/// Time that doesn't add up to a full period is carried into the next call, so the
/// long run rate is exact however unevenly `advance` is called.
#[derive(Debug, Clone)]
pub struct Cadence {
    period: Duration,
    carry: Duration,
}

impl Cadence {
    /// # Arguments
    /// * `hz` events per second; must be non-zero
    pub fn new(hz: u32) -> Self {
        Cadence {
            period: (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1)),
            carry: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Adds `elapsed` and returns how many events are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let period = self.period.as_nanos();
        let due = self.carry.as_nanos() / period;
        self.carry = Duration::from_nanos((self.carry.as_nanos() % period) as u64);
        u32::try_from(due).unwrap_or(u32::MAX)
    }
}
