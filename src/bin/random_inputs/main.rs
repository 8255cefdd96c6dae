//! random-5-byte-inputs - generate a directory of small random binary files

use anyhow::Result;
use clap::Parser;
use rawbytes_core::{generate, logging, GeneratorSettings};
use std::io;

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let settings = GeneratorSettings {
        seed: cli.seed,
        ..Default::default()
    };

    let stdout = io::stdout();
    generate(&settings, &mut stdout.lock())?;
    Ok(())
}
