use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub(crate) const USAGE_TEXT: &str =
    "usage: ai4x [--save-dir <dir>] [--settings <file>] (new <name> | list | end <name>)";

#[derive(Debug, Parser)]
#[command(name = "ai4x")]
#[command(about = "ai4x save manager and engine front-end")]
pub(crate) struct Cli {
    /// Save directory to use instead of ./Saves
    #[arg(long = "save-dir", global = true)]
    pub(crate) save_dir: Option<PathBuf>,
    /// Engine settings file (defaults to .vscode/settings.json)
    #[arg(long = "settings", global = true)]
    pub(crate) settings: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Create a new save
    New(SaveNameArgs),
    /// List the existing saves
    List(TrailingArgs),
    /// End the current turn of a save
    End(SaveNameArgs),
}

impl Mode {
    pub(crate) fn ignored_args(&self) -> &[String] {
        match self {
            Mode::New(args) | Mode::End(args) => &args.ignored,
            Mode::List(args) => &args.ignored,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct SaveNameArgs {
    pub(crate) name: Option<String>,
    #[arg(hide = true)]
    pub(crate) ignored: Vec<String>,
}

/// Extra words after a command are accepted and dropped.
#[derive(Debug, Args)]
pub(crate) struct TrailingArgs {
    #[arg(hide = true)]
    pub(crate) ignored: Vec<String>,
}
