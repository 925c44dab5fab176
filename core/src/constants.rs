/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are loaded and where the program counter starts
pub const PROGRAM_START: u16 = 0x200;

/// Where the hexadecimal sprite sheet is installed
pub const SPRITE_SHEET_START: u16 = 0x000;

/// Bytes per digit in the sprite sheet
pub const SPRITE_HEIGHT: u16 = 5;

/// Number of general purpose registers (V0..VF)
pub const REGISTER_COUNT: usize = 16;

/// The register written by operations that produce a carry, borrow or collision
pub const FLAG_REGISTER: u8 = 0xF;

/// Maximum number of nested subroutine calls
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default instruction rate in Hz
pub const CLOCK_SPEED: u32 = 500;

/// Rate at which the delay and sound timers count down
pub const TIMER_HZ: u32 = 60;

/// # Sprite sheet
/// Sprites for the hexadecimal digits 0..F, five rows each.
/// Only the high nibble of each row is lit, e.g. the digit 0:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
