use anyhow::Context;
use board_config::BoardConfig;
use tracing::debug;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BoardConfig> {
    let mut config = match flags.config.as_deref() {
        Some(path) => {
            dotenvy::dotenv().ok();
            BoardConfig::load_with_file(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?
        }
        None => BoardConfig::load_with_dotenv().context("failed to load taskboard config")?,
    };

    if flags.no_seed {
        config.general.seed_sample_data = false;
    }

    debug!(
        ordering = ?config.board.ordering,
        seed = config.general.seed_sample_data,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use board_config::OrderingMode;

    use super::load_config;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(config: Option<std::path::PathBuf>, no_seed: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
            no_seed,
            config,
        }
    }

    #[test]
    fn explicit_file_is_layered_and_no_seed_wins() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[general]\nseed_sample_data = true\n\n[board]\nordering = \"created_at\""
        )
        .expect("write config");

        let config =
            load_config(&flags(Some(file.path().to_path_buf()), true)).expect("config loads");

        assert_eq!(config.board.ordering, OrderingMode::CreatedAt);
        assert!(!config.general.seed_sample_data);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = std::env::temp_dir().join("taskboard-missing-config.toml");
        let err = load_config(&flags(Some(missing), false)).expect_err("should fail");
        assert!(format!("{err:#}").contains("failed to load config file"));
    }
}
