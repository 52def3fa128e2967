//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagesmith_core::domain::{Bundler, Framework, Styling, Testing};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pagesmith",
    bin_name = "pagesmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Export UI component trees to framework projects",
    long_about = "Pagesmith turns a JSON component tree into a ready-to-run \
                  React, Vue, Svelte, Angular or static HTML project.",
    after_help = "EXAMPLES:\n\
        \x20 pagesmith export page.json --framework react --typescript --styling tailwind\n\
        \x20 pagesmith export page.json -f vue --out ./site --dry-run\n\
        \x20 pagesmith deps -f svelte --testing vitest\n\
        \x20 pagesmith completions bash > /usr/share/bash-completion/completions/pagesmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a component tree to a project.
    #[command(
        visible_alias = "x",
        about = "Export a component tree",
        after_help = "EXAMPLES:\n\
            \x20 pagesmith export page.json --framework react\n\
            \x20 pagesmith export page.json -f angular --styling scss --testing jest\n\
            \x20 pagesmith export page.json -f html --out ./site --force\n\
            \x20 pagesmith export page.json -f vue --format json --dry-run"
    )]
    Export(ExportArgs),

    /// List the frameworks that can be exported to.
    #[command(
        visible_alias = "ls",
        about = "List export targets",
        after_help = "EXAMPLES:\n\
            \x20 pagesmith frameworks\n\
            \x20 pagesmith frameworks --format json"
    )]
    Frameworks(FrameworksArgs),

    /// Show the packages and scripts a configuration resolves to.
    #[command(
        about = "Show resolved dependencies",
        after_help = "EXAMPLES:\n\
            \x20 pagesmith deps -f react --typescript --styling tailwind\n\
            \x20 pagesmith deps -f svelte --bundler webpack --format json"
    )]
    Deps(DepsArgs),

    /// Initialise a Pagesmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pagesmith init           # default location\n\
            \x20 pagesmith init --local   # .pagesmith.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pagesmith completions bash > ~/.local/share/bash-completion/completions/pagesmith\n\
            \x20 pagesmith completions zsh  > ~/.zfunc/_pagesmith\n\
            \x20 pagesmith completions fish > ~/.config/fish/completions/pagesmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Pagesmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pagesmith config get defaults.framework\n\
            \x20 pagesmith config set defaults.framework vue\n\
            \x20 pagesmith config list"
    )]
    Config(ConfigCommands),
}

// ── shared target options ─────────────────────────────────────────────────────

/// Options that make up an export configuration.
///
/// Anything left unset falls back to `[defaults]` in the config file, then
/// to the engine's own inference.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Target framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Target framework"
    )]
    pub framework: Option<FrameworkArg>,

    /// Emit TypeScript sources.
    #[arg(long = "typescript", visible_alias = "ts", help = "Emit TypeScript")]
    pub typescript: bool,

    /// Styling system.
    #[arg(short = 's', long = "styling", value_enum, help = "Styling system")]
    pub styling: Option<StylingArg>,

    /// Build tool.
    #[arg(short = 'b', long = "bundler", value_enum, help = "Bundler")]
    pub bundler: Option<BundlerArg>,

    /// Test runner; no tests are generated without one.
    #[arg(short = 't', long = "testing", value_enum, help = "Test runner")]
    pub testing: Option<TestingArg>,

    #[arg(long = "no-accessibility", help = "Skip ARIA attributes and a11y notes")]
    pub no_accessibility: bool,

    #[arg(long = "no-seo", help = "Skip SEO head tags")]
    pub no_seo: bool,

    #[arg(long = "no-performance", help = "Skip memoization and lazy loading")]
    pub no_performance: bool,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `pagesmith export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// JSON file holding one component or an array of components.
    #[arg(value_name = "TREE", help = "Component tree JSON file")]
    pub input: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Package name for the generated project.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Output directory; defaults to `./<name>`.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory (default: ./<name>)"
    )]
    pub out: Option<PathBuf>,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Skip the overwrite confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Do not ask before overwriting")]
    pub yes: bool,

    /// Generate but do not write anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Result format"
    )]
    pub format: ReportFormat,
}

/// Output format for `export` and `deps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}

// ── frameworks ────────────────────────────────────────────────────────────────

/// Arguments for `pagesmith frameworks`.
#[derive(Debug, Args)]
pub struct FrameworksArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `frameworks` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── deps ──────────────────────────────────────────────────────────────────────

/// Arguments for `pagesmith deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Result format"
    )]
    pub format: ReportFormat,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pagesmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.pagesmith.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pagesmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pagesmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrameworkArg {
    React,
    #[value(alias = "vue3")]
    Vue,
    Svelte,
    #[value(alias = "ng")]
    Angular,
    #[value(alias = "vanilla")]
    Html,
}

impl From<FrameworkArg> for Framework {
    fn from(arg: FrameworkArg) -> Self {
        match arg {
            FrameworkArg::React => Framework::React,
            FrameworkArg::Vue => Framework::Vue,
            FrameworkArg::Svelte => Framework::Svelte,
            FrameworkArg::Angular => Framework::Angular,
            FrameworkArg::Html => Framework::Html,
        }
    }
}

/// Styling systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StylingArg {
    Css,
    CssModules,
    #[value(alias = "tailwindcss")]
    Tailwind,
    #[value(alias = "sass")]
    Scss,
    StyledComponents,
}

impl From<StylingArg> for Styling {
    fn from(arg: StylingArg) -> Self {
        match arg {
            StylingArg::Css => Styling::Css,
            StylingArg::CssModules => Styling::CssModules,
            StylingArg::Tailwind => Styling::Tailwind,
            StylingArg::Scss => Styling::Scss,
            StylingArg::StyledComponents => Styling::StyledComponents,
        }
    }
}

/// Bundlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BundlerArg {
    Vite,
    Webpack,
    Parcel,
}

impl From<BundlerArg> for Bundler {
    fn from(arg: BundlerArg) -> Self {
        match arg {
            BundlerArg::Vite => Bundler::Vite,
            BundlerArg::Webpack => Bundler::Webpack,
            BundlerArg::Parcel => Bundler::Parcel,
        }
    }
}

/// Test runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TestingArg {
    Vitest,
    Jest,
}

impl From<TestingArg> for Testing {
    fn from(arg: TestingArg) -> Self {
        match arg {
            TestingArg::Vitest => Testing::Vitest,
            TestingArg::Jest => Testing::Jest,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
