use thiserror::Error;

/// Fatal conditions raised while loading or running a program.
///
/// None of these are retried by the machine itself; the host decides whether to halt
/// or reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("unknown opcode {word:#06X} at PC {pc:#05X}")]
    Decode { word: u16, pc: u16 },

    #[error("stack overflow: call at depth {depth}")]
    StackOverflow { depth: usize },

    #[error("stack underflow: return at depth {depth}")]
    StackUnderflow { depth: usize },

    #[error("{len} bytes at {address:#05X} do not fit in memory")]
    OutOfRange { address: usize, len: usize },
}

/// Problems reading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
