use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pyramid-chart")]
#[command(author, version, about = "Render population pyramid bar charts in the terminal")]
#[command(long_about = "Renders a population pyramid: two mirrored horizontal bar series\n\
    diverging from a central axis, aligned by a shared bucket-label set.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a pyramid chart
    Render(RenderArgs),

    /// Generate a default style configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Use randomly generated data instead of the built-in example
    #[arg(long)]
    pub random: bool,

    /// Seed for random data (implies --random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows per bar (1-25, overrides config)
    #[arg(long)]
    pub bar_height: Option<u16>,

    /// Color for the left-side series (overrides config)
    #[arg(long)]
    pub left_color: Option<String>,

    /// Color for the right-side series (overrides config)
    #[arg(long)]
    pub right_color: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Write to this path instead of the default config name
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
