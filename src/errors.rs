//! Error types for the respmap shell.
//!
//! The analysis core never fails on malformed input; it returns partial or
//! empty results instead. Errors only arise at the boundary: reading the
//! source, loading configuration, size limits and user selections.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File system errors with the path that was being accessed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit
    #[error("Source is {size} bytes, larger than the {limit} byte limit")]
    SourceTooLarge { size: usize, limit: usize },

    /// Blank or whitespace-only source text
    #[error("Source text is empty")]
    EmptySource,

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Selected dependency does not exist in the analysis result
    #[error("Unknown dependency `{0}`")]
    UnknownDependency(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
