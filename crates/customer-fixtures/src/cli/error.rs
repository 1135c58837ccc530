//! Error types for the command-line front end.

use std::io;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::config::SettingsError;
use crate::error::GenerationError;

/// Errors surfaced by the CLI flow.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded from files or the environment.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The output directory is not valid UTF-8.
    #[error("output directory '{}' is not valid UTF-8", path.display())]
    NonUtf8Path {
        /// The rejected directory.
        path: PathBuf,
    },
    /// A zero progress interval was configured.
    #[error("progress interval must be greater than zero")]
    InvalidProgressInterval,
    /// The output directory could not be opened.
    #[error("failed to open output directory '{path}': {source}")]
    OutputDirectory {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading the prompt or writing console output failed.
    #[error("console I/O failed: {source}")]
    Console {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
    /// Writing the document failed.
    #[error("generation failed: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
}
