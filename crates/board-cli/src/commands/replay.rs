use std::path::Path;

use anyhow::Context;
use board_store::{BoardCommand, BoardController, CommandOutcome};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{GlobalFlags, ReplayArgs};
use crate::commands::shared::filters::apply_filter_args;
use crate::context::AppContext;
use crate::output::{output, output_board};

/// Result of one replayed script line.
#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub line: usize,
    pub command: String,
    #[serde(flatten)]
    pub outcome: CommandOutcome,
}

/// Handle `board replay`.
pub fn handle(args: &ReplayArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let steps = replay_script(&args.script, &mut ctx.board)?;
    info!(
        script = %args.script.display(),
        commands = steps.len(),
        activities = ctx.board.store().len(),
        "replay finished"
    );

    if args.outcomes {
        return output(&steps, flags.format);
    }
    apply_filter_args(&args.filters, ctx.board.store_mut())?;
    output_board(&ctx.board.store().snapshot(), flags.format)
}

/// Read every command from `path`, then apply them in order.
///
/// Parsing happens up front so a malformed script changes nothing. A
/// command that fails to apply stops the replay; earlier commands stay
/// applied.
pub fn replay_script(path: &Path, board: &mut BoardController) -> anyhow::Result<Vec<ReplayStep>> {
    let commands = read_script(path)?;
    let mut steps = Vec::with_capacity(commands.len());

    for (index, command) in commands.into_iter().enumerate() {
        let line = index + 1;
        let description = command.description();
        debug!(line, command = %description, "applying");
        let outcome = command
            .apply(board)
            .with_context(|| format!("line {line}: {description} failed"))?;
        steps.push(ReplayStep {
            line,
            command: description,
            outcome,
        });
    }

    Ok(steps)
}

fn read_script(path: &Path) -> anyhow::Result<Vec<BoardCommand>> {
    let lines = serde_jsonlines::json_lines(path)
        .with_context(|| format!("failed to open script {}", path.display()))?;

    lines
        .enumerate()
        .map(|(index, command)| {
            command.with_context(|| format!("{}: line {}: invalid command", path.display(), index + 1))
        })
        .collect()
}
