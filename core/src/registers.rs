use crate::constants::{PROGRAM_START, REGISTER_COUNT};
use crate::timers::{Timer, Timers};

/// # Register file
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also written as the carry/borrow/collision flag
/// - (i) a 16-bit address register; it holds any 16-bit value and is only reduced to a
///   memory address when memory is accessed through it
/// - (pc) a 16-bit program counter
/// - 2 8-bit timers (delay & sound)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    v: [u8; REGISTER_COUNT],
    i: u16,
    pc: u16,
    timers: Timers,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            timers: Timers::new(),
        }
    }

    /// Only the low nibble of `index` selects a register
    pub fn get(&self, index: u8) -> u8 {
        self.v[(index & 0xF) as usize]
    }

    pub fn set(&mut self, index: u8, value: u8) {
        self.v[(index & 0xF) as usize] = value;
    }

    pub fn v(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    pub fn get_addr(&self) -> u16 {
        self.i
    }

    pub fn set_addr(&mut self, addr: u16) {
        self.i = addr;
    }

    pub fn get_pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn get_timer(&self, timer: Timer) -> u8 {
        self.timers.get(timer)
    }

    pub fn set_timer(&mut self, timer: Timer, value: u8) {
        self.timers.set(timer, value);
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut Timers {
        &mut self.timers
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program() {
        let registers = RegisterFile::new();
        assert_eq!(registers.get_pc(), 0x200);
        assert_eq!(registers.get_addr(), 0x0);
        assert_eq!(registers.v(), &[0; 16]);
    }

    #[test]
    fn test_get_set() {
        let mut registers = RegisterFile::new();
        registers.set(0xA, 0x42);
        assert_eq!(registers.get(0xA), 0x42);
    }

    #[test]
    fn test_index_uses_low_nibble() {
        let mut registers = RegisterFile::new();
        registers.set(0x1F, 0x7);
        assert_eq!(registers.get(0xF), 0x7);
    }

    #[test]
    fn test_address_register_holds_full_width() {
        let mut registers = RegisterFile::new();
        registers.set_addr(0xFFFF);
        assert_eq!(registers.get_addr(), 0xFFFF);
    }

    #[test]
    fn test_timers() {
        let mut registers = RegisterFile::new();
        registers.set_timer(Timer::Sound, 0x3);
        registers.timers_mut().tick();
        assert_eq!(registers.get_timer(Timer::Sound), 0x2);
        assert!(registers.timers().is_sound_active());
    }
}
