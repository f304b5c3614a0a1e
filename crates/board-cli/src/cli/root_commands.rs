use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the board, grouped by column, after applying filters.
    Show(FilterArgs),
    /// Apply a JSON Lines script of board commands, then print the board.
    Replay(ReplayArgs),
    /// List the fixed board columns.
    Columns,
}

/// Filter criteria shared by `show` and `replay`. Omitted flags leave the
/// criterion unfiltered; `all` resets it explicitly.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Status to show: all, todo, in-progress, completed, cancelled
    #[arg(long)]
    pub status: Option<String>,

    /// Priority to show: all, low, medium, high
    #[arg(long)]
    pub priority: Option<String>,

    /// Case-insensitive substring matched against title and description
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ReplayArgs {
    /// JSON Lines file, one board command per line
    pub script: PathBuf,

    /// Print the outcome of each command instead of the final board
    #[arg(long)]
    pub outcomes: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}
