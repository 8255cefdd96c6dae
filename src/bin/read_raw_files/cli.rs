//! Command-line interface for read-raw-files

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: read-raw-files <directory_path>";

#[derive(Parser, Debug)]
#[command(name = "read-raw-files")]
#[command(version, about = "Print every file in a directory, decoding its bytes as UTF-8", long_about = None)]
pub struct Cli {
    /// Directory whose files are printed (not recursive)
    pub directory_path: PathBuf,

    /// Log more detail to stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments. A wrong argument count prints the usage line to stdout
/// and returns `None`; `--help` and `--version` exit as usual.
pub fn parse() -> Option<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Some(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", USAGE);
                None
            }
        },
    }
}
