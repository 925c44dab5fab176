//! Configuration for the interpreter and its host.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```toml
//! # pinocho.toml
//! clock_speed = 700
//! seed = 42
//!
//! [quirks]
//! load_store_increments_index = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{CLOCK_SPEED, TIMER_HZ};
use crate::error::ConfigError;

/// Picked up from the working directory when no config file is named
pub const LOCAL_CONFIG: &str = "pinocho.toml";

/// Highest accepted `clock_speed` or `timer_hz`
pub const MAX_RATE: u32 = 1_000_000;

/// Behaviours where interpreters of the instruction set disagree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quirks {
    /// Fx55/Fx65 leave I pointing one past the last register transferred.
    /// When unset I is left unchanged.
    pub load_store_increments_index: bool,

    /// Sprite pixels that run past the right or bottom edge are dropped.
    /// When unset they wrap around to the opposite edge.
    pub clip_sprites: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Instructions executed per second
    pub clock_speed: u32,

    /// Timer decrements per second
    pub timer_hz: u32,

    /// Window pixels per display pixel
    pub scale: u32,

    /// Seed for the random number instruction; random when absent
    pub seed: Option<u64>,

    pub quirks: Quirks,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clock_speed: CLOCK_SPEED,
            timer_hz: TIMER_HZ,
            scale: 10,
            seed: None,
            quirks: Quirks::default(),
        }
    }
}

impl Config {
    /// Loads `path` if given, otherwise `./pinocho.toml` if present, otherwise defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(LOCAL_CONFIG).exists() => Self::from_file(Path::new(LOCAL_CONFIG))?,
            None => Self::default(),
        };
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, rate) in [("clock_speed", self.clock_speed), ("timer_hz", self.timer_hz)] {
            if rate == 0 || rate > MAX_RATE {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 1 and {}",
                    name, MAX_RATE
                )));
            }
        }
        if self.scale == 0 {
            return Err(ConfigError::Invalid("scale must be positive".into()));
        }
        Ok(())
    }
}
