use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::{Commands, FilterArgs, ReplayArgs};

/// Top-level CLI parser for the `board` binary.
#[derive(Debug, Parser)]
#[command(name = "board", version, about = "Taskboard - kanban activity board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start from an empty board instead of the sample activities
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Extra TOML config file, layered above the project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            no_seed: self.no_seed,
            config: self.config.clone(),
        }
    }
}
