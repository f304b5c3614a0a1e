//! # board-config
//!
//! Layered configuration loading for Taskboard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKBOARD_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config` (CLI only)
//! 3. Project-level `.taskboard/config.toml`
//! 4. User-level `~/.config/taskboard/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKBOARD_BOARD__ORDERING` -> `board.ordering` and
//! `TASKBOARD_GENERAL__SEED_SAMPLE_DATA` -> `general.seed_sample_data`.
//!
//! # Usage
//!
//! ```no_run
//! use board_config::{BoardConfig, OrderingMode};
//!
//! let config = BoardConfig::load_with_dotenv().expect("config");
//! if config.board.ordering == OrderingMode::CreatedAt {
//!     println!("legacy ordering enabled");
//! }
//! ```

mod board;
mod error;
mod general;

pub use board::{BoardSettings, OrderingMode};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardSettings,
}

impl BoardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit TOML file layered above the
    /// project file and below the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `path` does not exist, or
    /// `ConfigError::Figment` on parse errors.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::layered(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(None)
    }

    fn layered(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".taskboard/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKBOARD_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskboard").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = BoardConfig::default();
        assert!(config.general.seed_sample_data);
        assert_eq!(config.board.ordering, OrderingMode::Manual);
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = BoardConfig::load_with_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }
}
