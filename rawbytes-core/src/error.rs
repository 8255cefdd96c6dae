use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a directory dump as a whole
///
/// Per-file read failures are not represented here; they are isolated
/// in [`crate::dumper::FileOutcome::Failed`].
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("'{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list '{}': {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = DumpError::NotADirectory(PathBuf::from("missing/dir"));
        assert_eq!(err.to_string(), "'missing/dir' is not a valid directory.");
    }
}
