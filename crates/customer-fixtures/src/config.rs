//! Generator settings loaded via OrthoConfig.
//!
//! Settings come from configuration files and `CUSTOMER_FIXTURES_*`
//! environment variables. Command-line flags are parsed separately and take
//! precedence over anything loaded here.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const PROGRAM_NAME: &str = "customer-fixtures";

const DEFAULT_OUTPUT_DIR: &str = ".";

/// Settings that shape a generation run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CUSTOMER_FIXTURES")]
pub struct GeneratorSettings {
    /// Records between progress notifications.
    #[ortho_config(default = 1000)]
    pub progress_interval: u32,
    /// Directory that receives the generated document.
    pub output_dir: Option<PathBuf>,
    /// Seed for the random source; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

/// Settings could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load settings: {message}")]
pub struct SettingsError {
    /// Description of the failure.
    pub message: String,
}

impl GeneratorSettings {
    /// Loads settings from configuration files and the environment only.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a configuration source is malformed.
    pub fn load_ambient() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError {
            message: err.to_string(),
        })
    }

    /// Returns the configured output directory, falling back to the working
    /// directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
