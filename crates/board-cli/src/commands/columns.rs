use board_core::layout::COLUMNS;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `board columns`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&COLUMNS, flags.format)
}
