//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    MissingFile { path: PathBuf },
}
