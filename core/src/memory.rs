use crate::constants::{MEMORY_SIZE, SPRITE_SHEET, SPRITE_SHEET_START};
use crate::error::MachineError;

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// ```text
/// 0x000..0x050  hexadecimal sprite sheet
/// 0x050..0x200  reserved for the interpreter
/// 0x200..0x1000 program and data
/// ```
///
/// Every access is taken modulo the memory size so reads and writes are total; only
/// bulk loads can fail, and they fail before writing anything.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet installed
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        let start = SPRITE_SHEET_START as usize;
        memory.bytes[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        memory
    }

    fn mask(addr: u16) -> usize {
        addr as usize % MEMORY_SIZE
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Memory::mask(addr)]
    }

    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[Memory::mask(addr)] = byte;
    }

    /// Reads the big-endian word at `addr`.
    /// The second byte wraps to the start of memory when `addr` is the last byte.
    pub fn read_word(&self, addr: u16) -> u16 {
        let left = u16::from(self.read(addr));
        let right = u16::from(self.read(addr.wrapping_add(1)));
        left << 8 | right
    }

    /// Copies `len` bytes starting at `addr`, wrapping past the end of memory
    pub fn slice(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.bytes[(Memory::mask(addr) + offset) % MEMORY_SIZE])
            .collect()
    }

    /// Installs `bytes` starting at `at`.
    ///
    /// Unlike single byte accesses this does not wrap: an image that runs past the end
    /// of memory is rejected and memory is left untouched.
    pub fn load(&mut self, bytes: &[u8], at: u16) -> Result<(), MachineError> {
        let start = at as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(MachineError::OutOfRange {
                address: start,
                len: bytes.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(bytes);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
