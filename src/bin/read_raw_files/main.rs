//! read-raw-files - print the contents of every file in a directory

use anyhow::Result;
use rawbytes_core::{dump_directory, logging, DumpError};
use std::io::{self, Write};

mod cli;

fn main() -> Result<()> {
    let Some(cli) = cli::parse() else {
        return Ok(());
    };
    logging::init(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match dump_directory(&cli.directory_path, &mut out) {
        Ok(_) => Ok(()),
        Err(err @ (DumpError::NotADirectory(_) | DumpError::Unreadable { .. })) => {
            writeln!(out, "Error: {}", err)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
