use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some
/// combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the the register Vy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combines two bytes fetched from memory
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from(high) << 8 | u16::from(low))
    }

    /// The component nibbles, most significant first
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (((self.0 & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `[_nnn]`
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode(word)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    const OP: Opcode = Opcode(0xABCD);

    #[test]
    fn test_from_bytes() {
        assert_eq!(Opcode::from_bytes(0xA2, 0x2A), Opcode(0xA22A));
    }

    #[test]
    fn test_nibbles() {
        assert_eq!(OP.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_fields() {
        assert_eq!(OP.x(), 0xB);
        assert_eq!(OP.y(), 0xC);
        assert_eq!(OP.n(), 0xD);
        assert_eq!(OP.kk(), 0xCD);
        assert_eq!(OP.nnn(), 0xBCD);
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode(0x00E0).to_string(), "00E0");
    }
}
