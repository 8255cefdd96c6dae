//! Random input generator: writes a batch of small random binary files

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory the generator writes into, relative to the working directory
pub const OUTPUT_DIR: &str = "random_5_byte_inputs";

/// Number of files produced per run
pub const FILE_COUNT: usize = 30;

/// Size of every generated file
pub const BYTES_PER_FILE: usize = 5;

/// Settings for a generator run
#[derive(Clone, Debug)]
pub struct GeneratorSettings {
    /// Output directory, created if missing
    pub output_dir: PathBuf,

    /// Files are numbered 1..=file_count
    pub file_count: usize,

    /// Seed for a reproducible run. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            file_count: FILE_COUNT,
            seed: None,
        }
    }
}

/// One file written by the generator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub index: usize,
    pub path: PathBuf,
    pub bytes: [u8; BYTES_PER_FILE],
}

/// Name of the file for `index`, e.g. `file_7.bin`
pub fn file_name(index: usize) -> String {
    format!("file_{}.bin", index)
}

/// Draw one file's worth of uniformly random bytes
pub fn random_bytes<R: RngCore + ?Sized>(rng: &mut R) -> [u8; BYTES_PER_FILE] {
    let mut bytes = [0u8; BYTES_PER_FILE];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Run the generator with the randomness source selected by `settings.seed`.
pub fn generate<W: Write>(settings: &GeneratorSettings, out: &mut W) -> Result<Vec<GeneratedFile>> {
    match settings.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            generate_with_rng(settings, &mut StdRng::seed_from_u64(seed), out)
        }
        None => generate_with_rng(settings, &mut rand::rng(), out),
    }
}

/// Create the output directory and write `file_count` random files into it,
/// printing one `File <i>: [..]` line per file to `out`.
///
/// Existing files with the same names are overwritten; anything else in the
/// directory is left alone. The first I/O error aborts the run.
pub fn generate_with_rng<R: RngCore + ?Sized, W: Write>(
    settings: &GeneratorSettings,
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<GeneratedFile>> {
    let dir = settings.output_dir.as_path();
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    info!("Writing {} files to {}", settings.file_count, dir.display());

    let mut generated = Vec::with_capacity(settings.file_count);
    for index in 1..=settings.file_count {
        let bytes = random_bytes(rng);
        writeln!(out, "File {}: {:?}", index, bytes).context("Failed to write progress line")?;

        let path = dir.join(file_name(index));
        write_file(&path, &bytes)?;
        debug!("Wrote {}", path.display());

        generated.push(GeneratedFile { index, path, bytes });
    }

    Ok(generated)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed to write {}", path.display()))
}
