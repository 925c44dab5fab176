use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pinocho_core::Config;

mod beeper;
mod host;
mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(name = "pinocho")]
#[command(about = "A Chip-8 interpreter", long_about = None)]
struct Args {
    /// Path to the Chip-8 program to run
    #[arg(required_unless_present = "dump_config")]
    rom: Option<PathBuf>,

    /// Configuration file; defaults to ./pinocho.toml when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Instructions executed per second
    #[arg(long)]
    clock_speed: Option<u32>,

    /// Window pixels per display pixel
    #[arg(long)]
    scale: Option<u32>,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Font image loaded over the built-in sprite sheet at 0x000
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    /// Flags given on the command line win over the config file
    fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref()).context("loading configuration")?;
        if let Some(clock_speed) = self.clock_speed {
            config.clock_speed = clock_speed;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config()?;

    if args.dump_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    match &args.rom {
        Some(rom) => run::run(rom, args.font.as_deref(), &config),
        None => Ok(()),
    }
}
