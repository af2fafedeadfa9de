//! Error types for the expansion pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors; everything else during expansion is silent by design
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The template could not be read
    #[error("failed to read template '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// An existing output file could not be read for comparison
    #[error("failed to read existing output '{}': {source}", path.display())]
    ReadOutput { path: PathBuf, source: io::Error },

    /// The output could not be written
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    /// The configuration file could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ExpandError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a read error for an existing output file
    pub fn read_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadOutput {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = ExpandError::read(
            "Tests/tpl.m",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        let text = err.to_string();
        assert!(text.contains("Tests/tpl.m"));
        assert!(text.contains("No such file"));
    }

    #[test]
    fn test_read_output_error_names_output() {
        let err = ExpandError::read_output(
            "Generated.m",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.starts_with("failed to read existing output 'Generated.m'"));
        assert!(!text.contains("template"));
    }

    #[test]
    fn test_write_error_from_io() {
        let err: ExpandError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, ExpandError::Write(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
