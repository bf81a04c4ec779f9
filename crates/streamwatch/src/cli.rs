//! Clap derive structures for the `streamwatch` CLI.
//!
//! Kept free of workspace crates so `build.rs` can include it directly.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// streamwatch -- which of your Twitch channels are live right now
#[derive(Debug, Parser)]
#[command(
    name = "streamwatch",
    version,
    about = "Check which tracked Twitch channels are live",
    long_about = "Fetches channel and stream data for a fixed list of Twitch channels\n\
        through a public proxy, classifies each as online, offline or closed,\n\
        and prints a table or renders an HTML status page.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the default location
    #[arg(long, env = "STREAMWATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Proxy base URL (overrides config)
    #[arg(long, short = 'b', env = "STREAMWATCH_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Channel to track; repeat or comma-separate to replace the configured list
    #[arg(long = "identity", short = 'i', value_delimiter = ',', global = true)]
    pub identities: Vec<String>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "STREAMWATCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format (default: from config, else table)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one channel per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Which rows to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every channel
    All,
    /// Only channels that are live
    Online,
    /// Only channels that exist but are not live
    Offline,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List channels and their status
    #[command(alias = "ls")]
    List(ListArgs),

    /// Render an HTML status page
    Render(RenderArgs),

    /// Count channels per status
    Summary,

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Row filter (default: from config, else all)
    #[arg(long, short = 'f')]
    pub filter: Option<FilterArg>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Row filter (default: from config, else all)
    #[arg(long, short = 'f')]
    pub filter: Option<FilterArg>,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Emit only the stream container, not a full page
    #[arg(long)]
    pub fragment: bool,

    /// Page title
    #[arg(long, default_value = "Twitch Streamers")]
    pub title: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
