use crate::cli::{FilterArgs, GlobalFlags};
use crate::commands::shared::filters::apply_filter_args;
use crate::context::AppContext;
use crate::output::output_board;

/// Handle `board show`.
pub fn handle(args: &FilterArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    apply_filter_args(args, ctx.board.store_mut())?;
    output_board(&ctx.board.store().snapshot(), flags.format)
}
