use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    #[must_use]
    pub const fn mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::Auto,
            Self::Always => ColorMode::Always,
            Self::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "numdist")]
#[command(author, version, about = "Bin numeric data into a histogram and render it as a bar chart")]
#[command(long_about = "Reads one record per line, extracts a numeric key, groups the records \
    into equal-width buckets and prints or renders the distribution.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Input, binning or rendering error\n  \
    2 - Configuration error")]
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
    /// Render the distribution as a PNG bar chart
    Render(RenderArgs),

    /// Print bucket ranges and counts
    Bin(BinArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Input and binning options shared by `render` and `bin`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct BinningArgs {
    /// Input file (`-` or omitted for stdin)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of buckets (overrides config)
    #[arg(short, long)]
    pub bins: Option<usize>,

    /// Lower bound of the key range (requires --max)
    #[arg(long, requires = "max", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper bound of the key range, inclusive (requires --min)
    #[arg(long, requires = "min", allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// 0-based field holding the numeric key
    #[arg(short = 'k', long)]
    pub column: Option<usize>,

    /// Field separator (default: any whitespace)
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub binning: BinningArgs,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Image width in pixels (minimum 400)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (minimum 200)
    #[arg(long)]
    pub height: Option<u32>,

    /// Label the value axis with counts instead of fractions of the total
    #[arg(long)]
    pub absolute: bool,
}

#[derive(Parser, Debug)]
pub struct BinArgs {
    #[command(flatten)]
    pub binning: BinningArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".numdist.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file (default: discovered .numdist.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
