//! Core functionality for rawbytes

pub mod decode;
pub mod dumper;
pub mod error;
pub mod generator;
pub mod logging;

// Re-exports
pub use decode::{decode_lossy, Decoded};
pub use dumper::{dump_directory, DumpSummary, FileOutcome};
pub use error::DumpError;
pub use generator::{generate, GeneratedFile, GeneratorSettings};
