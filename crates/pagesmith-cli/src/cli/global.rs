//! Flags shared by every `pagesmith` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Logging, colour, config and output switches.
///
/// All of them are `global`, so `pagesmith export page.json -vv` and
/// `pagesmith -vv export page.json` are equivalent.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` export stages, `-vv` every emitted file, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours (also set by `NO_COLOR`).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of `.pagesmith.toml` or the user config.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rendering of command output.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,

    /// Mirror logs into FILE, without colours.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured, with progress bars.
    Human,
    /// No colours, no progress bars.
    Plain,
    /// JSON documents on stdout, JSON logs on stderr.
    Json,
}
