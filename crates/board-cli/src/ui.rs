//! Terminal-dependent render settings, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals fall back to unbounded tables.
const MIN_TABLE_WIDTH: usize = 40;

/// How board tables are drawn on this terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderSettings {
    /// Color status and priority cells.
    pub color: bool,
    /// Upper bound for a table row, from `COLUMNS`.
    pub max_width: Option<usize>,
}

static RENDER_SETTINGS: OnceLock<RenderSettings> = OnceLock::new();

impl RenderSettings {
    fn resolve(flags: &GlobalFlags) -> Self {
        let tables = flags.format == OutputFormat::Table;
        let color = tables
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    !flags.quiet
                        && std::io::stdout().is_terminal()
                        && std::env::var_os("NO_COLOR").is_none()
                }
            };

        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self { color, max_width }
    }
}

/// Resolve settings for this run. Later calls keep the first result.
pub fn init(flags: &GlobalFlags) {
    let _ = RENDER_SETTINGS.set(RenderSettings::resolve(flags));
}

/// Settings from [`init`], or plain unbounded tables if it never ran.
#[must_use]
pub fn settings() -> RenderSettings {
    RENDER_SETTINGS.get().copied().unwrap_or_default()
}
