use tracing::debug;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    debug!(
        ordering = ?ctx.config.board.ordering,
        verbose = flags.verbose,
        ?command,
        "dispatching"
    );
    match command {
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Replay(args) => commands::replay::handle(&args, ctx, flags),
        Commands::Columns => commands::columns::handle(flags),
    }
}
