use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; each pixel is 0 (off) or 1 (on)
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Sprites are at most 15 rows tall
pub const MAX_SPRITE_ROWS: usize = 15;

/// # Display buffer
/// The 64x32 monochrome screen.
///
/// Sprites are XORed onto the screen one row (byte) at a time, most significant bit
/// leftmost. The start position always wraps onto the screen; pixels that then run past
/// an edge either wrap around to the opposite side or, when `clip` is set, are dropped.
#[derive(Clone)]
pub struct DisplayBuffer {
    pixels: FrameBuffer,
    clip: bool,
    dirty: bool,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::with_clipping(false)
    }

    pub fn with_clipping(clip: bool) -> Self {
        DisplayBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            clip,
            dirty: true,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs `rows` onto the screen with its top left corner at (x, y).
    ///
    /// Returns true if any lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let x0 = x as usize % DISPLAY_WIDTH;
        let y0 = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in rows.iter().take(MAX_SPRITE_ROWS).enumerate() {
            let py = y0 + row;
            if self.clip && py >= DISPLAY_HEIGHT {
                break;
            }
            let py = py % DISPLAY_HEIGHT;

            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let px = x0 + bit;
                if self.clip && px >= DISPLAY_WIDTH {
                    break;
                }
                let px = px % DISPLAY_WIDTH;

                collision |= self.pixels[py][px] == 1;
                self.pixels[py][px] ^= 1;
            }
        }

        self.dirty = true;
        collision
    }

    /// Reads a single pixel; coordinates wrap
    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// A copy of the screen; changing it has no effect on the machine
    pub fn snapshot(&self) -> FrameBuffer {
        self.pixels
    }

    /// Returns a snapshot if the screen changed since the last call
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.dirty {
            self.dirty = false;
            Some(self.pixels)
        } else {
            None
        }
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}
