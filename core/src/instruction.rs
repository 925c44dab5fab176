use std::fmt;

use crate::opcode::Opcode;

/// A decoded instruction.
///
/// `x` and `y` name registers (0x0..=0xF), `kk` is an immediate byte, `n` a nibble and
/// `addr` a 12-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn: machine code routine; ignored
    Sys { addr: u16 },
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jump { addr: u16 },
    /// 2nnn
    Call { addr: u16 },
    /// 3xkk
    SkipEq { x: u8, kk: u8 },
    /// 4xkk
    SkipNe { x: u8, kk: u8 },
    /// 5xy0
    SkipEqReg { x: u8, y: u8 },
    /// 6xkk
    Load { x: u8, kk: u8 },
    /// 7xkk
    Add { x: u8, kk: u8 },
    /// 8xy0
    Move { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddReg { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    ShiftRight { x: u8, y: u8 },
    /// 8xy7
    SubN { x: u8, y: u8 },
    /// 8xyE
    ShiftLeft { x: u8, y: u8 },
    /// 9xy0
    SkipNeReg { x: u8, y: u8 },
    /// Annn
    LoadI { addr: u16 },
    /// Bnnn
    JumpV0 { addr: u16 },
    /// Cxkk
    Rand { x: u8, kk: u8 },
    /// Dxyn
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E
    SkipPressed { x: u8 },
    /// ExA1
    SkipNotPressed { x: u8 },
    /// Fx07
    LoadDelay { x: u8 },
    /// Fx0A
    WaitKey { x: u8 },
    /// Fx15
    SetDelay { x: u8 },
    /// Fx18
    SetSound { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    LoadSprite { x: u8 },
    /// Fx33
    Bcd { x: u8 },
    /// Fx55
    Store { x: u8 },
    /// Fx65
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    /// Returns None for words that don't encode any instruction.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x0, ..) => Sys { addr },
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => SkipEq { x, kk },
            (0x4, ..) => SkipNe { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => Load { x, kk },
            (0x7, ..) => Add { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadI { addr },
            (0xB, ..) => JumpV0 { addr },
            (0xC, ..) => Rand { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddI { x },
            (0xF, _, 0x2, 0x9) => LoadSprite { x },
            (0xF, _, 0x3, 0x3) => Bcd { x },
            (0xF, _, 0x5, 0x5) => Store { x },
            (0xF, _, 0x6, 0x5) => Read { x },
            _ => return None,
        };
        Some(instruction)
    }
}

/// Renders the instruction in the conventional assembly syntax
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Sys { addr } => write!(f, "SYS {:#05X}", addr),
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jump { addr } => write!(f, "JP {:#05X}", addr),
            Call { addr } => write!(f, "CALL {:#05X}", addr),
            SkipEq { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNe { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Load { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Add { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x, y } => write!(f, "SHR V{:X} {{, V{:X}}}", x, y),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x, y } => write!(f, "SHL V{:X} {{, V{:X}}}", x, y),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI { addr } => write!(f, "LD I, {:#05X}", addr),
            JumpV0 { addr } => write!(f, "JP V0, {:#05X}", addr),
            Rand { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {:#X}", x, y, n),
            SkipPressed { x } => write!(f, "SKP V{:X}", x),
            SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LoadSprite { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
