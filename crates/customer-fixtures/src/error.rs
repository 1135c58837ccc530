//! Error types for document generation.
//!
//! Generation itself cannot fail; every variant here describes a problem with
//! the output destination.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that abort writing a customer document.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The output path is not a plain file name.
    #[error("output path '{path}' must be a file name without directories")]
    InvalidFileName {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// The output file could not be created or truncated.
    #[error("failed to open output file '{path}': {source}")]
    Open {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing, flushing or syncing the output failed.
    #[error("failed to write output file '{path}': {source}")]
    Write {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
