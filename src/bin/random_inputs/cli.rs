//! Command-line interface for random-5-byte-inputs

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "random-5-byte-inputs")]
#[command(version, about = "Write 30 files of 5 random bytes into random_5_byte_inputs/", long_about = None)]
pub struct Cli {
    /// Seed the generator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log more detail to stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
