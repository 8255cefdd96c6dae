//! Directory dumper: prints every regular file directly inside a directory

use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use walkdir::WalkDir;

use crate::decode::{decode_lossy, Decoded};
use crate::error::DumpError;

/// A file that was read and decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpedFile {
    pub name: String,
    pub decoded: Decoded,
}

/// Result of processing one directory entry
#[derive(Debug)]
pub enum FileOutcome {
    Dumped(DumpedFile),
    Failed { name: String, error: io::Error },
}

impl FileOutcome {
    pub fn name(&self) -> &str {
        match self {
            FileOutcome::Dumped(file) => &file.name,
            FileOutcome::Failed { name, .. } => name,
        }
    }

    /// Write the report section for this entry
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            FileOutcome::Dumped(file) => {
                writeln!(out, "\n=== {} ===", file.name)?;
                writeln!(out, "{}", file.decoded.text)
            }
            FileOutcome::Failed { name, error } => {
                writeln!(out, "Failed to read file {}: {}", name, error)
            }
        }
    }
}

/// Counters for a completed dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub dumped: usize,
    pub failed: usize,
    pub replacements: usize,
}

impl DumpSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Dumped(file) => {
                self.dumped += 1;
                self.replacements += file.decoded.replacements;
            }
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Read and decode a single file. Read errors become [`FileOutcome::Failed`].
pub fn read_entry(path: &Path) -> FileOutcome {
    let name = display_name(path);

    let read = || -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    };

    match read() {
        Ok(bytes) => FileOutcome::Dumped(DumpedFile {
            name,
            decoded: decode_lossy(&bytes),
        }),
        Err(error) => FileOutcome::Failed { name, error },
    }
}

/// Dump every regular file directly inside `dir` to `out`.
///
/// Entries are visited in the order the filesystem returns them. Directories,
/// symlinks and special files are skipped without being reported.
pub fn dump_directory<W: Write>(dir: impl AsRef<Path>, out: &mut W) -> Result<DumpSummary, DumpError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DumpError::NotADirectory(dir.to_path_buf()));
    }

    if let Err(source) = fs::read_dir(dir) {
        return Err(DumpError::Unreadable {
            path: dir.to_path_buf(),
            source,
        });
    }

    info!("Dumping files in {}", dir.display());
    let outcomes = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(read_entry(entry.path())),
            Ok(entry) => {
                debug!("Skipping non-regular entry {}", entry.path().display());
                None
            }
            Err(err) => {
                let name = err.path().map(display_name).unwrap_or_default();
                Some(FileOutcome::Failed { name, error: err.into() })
            }
        });

    let summary = dump_outcomes(outcomes, out)?;
    info!(
        "Dumped {} files ({} failed, {} invalid sequences replaced)",
        summary.dumped, summary.failed, summary.replacements
    );
    Ok(summary)
}

/// Render each outcome in turn. A failed entry is reported and the fold moves on.
fn dump_outcomes<I, W>(outcomes: I, out: &mut W) -> io::Result<DumpSummary>
where
    I: IntoIterator<Item = FileOutcome>,
    W: Write,
{
    let mut summary = DumpSummary::default();
    for outcome in outcomes {
        if let FileOutcome::Failed { error, .. } = &outcome {
            warn!("Failed to read {}: {}", outcome.name(), error);
        }
        outcome.render(out)?;
        summary.record(&outcome);
    }
    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
