use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};

use display::Display;
use pinocho_core::constants::SPRITE_SHEET_START;
use pinocho_core::{Chip8, Config, Flow, Runner};

use crate::beeper::Beeper;
use crate::host::{SdlInput, SdlOutput};

pub fn run(rom: &Path, font: Option<&Path>, config: &Config) -> Result<()> {
    let mut chip8 = Chip8::from_config(config);

    // Load the font over the built-in sprites, then the ROM
    if let Some(font) = font {
        let bytes = fs::read(font).with_context(|| format!("reading font {}", font.display()))?;
        chip8.load(&bytes, SPRITE_SHEET_START)?;
    }
    let program = fs::read(rom).with_context(|| format!("reading ROM {}", rom.display()))?;
    chip8
        .load_program(&program)
        .with_context(|| format!("loading ROM {}", rom.display()))?;
    log::info!("loaded {} ({} bytes)", rom.display(), program.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e)).context("initialising SDL")?;
    let display = Display::new(&sdl, "Pinocho", config.scale)
        .map_err(|e| anyhow!(e))
        .context("opening window")?;
    let events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut input = SdlInput::new(events);
    let mut output = SdlOutput::new(display, Beeper::new(&sdl));

    let mut runner = Runner::from_config(chip8, config);
    let period = runner.timer_period();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let flow = runner
            .advance(now - last_frame, &mut input, &mut output)
            .context("program halted")?;
        last_frame = now;
        if flow == Flow::Quit {
            log::info!("quitting");
            return Ok(());
        }

        // Handle timing
        let spent = now.elapsed();
        if spent < period {
            std::thread::sleep(period - spent);
        }
    }
}
