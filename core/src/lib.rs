pub use chip8::{Chip8, Status, Step};
pub use config::{Config, Quirks, LOCAL_CONFIG};
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, TIMER_HZ};
pub use display_buffer::FrameBuffer;
pub use error::{ConfigError, MachineError};
pub use host::{Input, Output};
pub use instruction::Instruction;
pub use keypad::KeyCode;
pub use memory::Memory;
pub use opcode::Opcode;
pub use registers::RegisterFile;
pub use runner::{Flow, Runner, MAX_CATCH_UP};
pub use timers::{Cadence, Timer, Timers};

mod chip8;
pub mod config;
pub mod constants;
mod display_buffer;
mod error;
mod host;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod registers;
mod runner;
mod stack;
mod timers;
