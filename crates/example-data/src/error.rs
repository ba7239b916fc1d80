//! Error types for generation and file writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating demo members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested member count is outside the supported range.
    #[error("member count must be between 1 and {max}, got {requested}")]
    InvalidCount {
        /// Requested member count.
        requested: usize,
        /// Largest supported member count.
        max: usize,
    },
}

/// Errors raised while writing the members document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The target path is not valid UTF-8.
    #[error("members path must be valid UTF-8: {path}")]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
    /// The target path does not name a file.
    #[error("members path must name a file: {path}")]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },
    /// Serialising the members to JSON failed.
    #[error("failed to serialise members: {message}")]
    Serialize {
        /// Underlying serialisation failure.
        message: String,
    },
    /// Writing or renaming the document failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
