use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "respmap")]
#[command(
    about = "Map injected dependencies to the methods that use them",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one C# class for mixed responsibilities
    Analyze {
        /// Source file to analyze, or `-` to read stdin
        path: PathBuf,

        /// Output format (defaults to the config file value, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dependency type to highlight
        #[arg(short, long)]
        select: Option<String>,

        /// Keep logging, configuration, caching and hosting services
        #[arg(long = "no-framework-filter", conflicts_with = "framework_filter")]
        no_framework_filter: bool,

        /// Drop framework services even if the config file disables it
        #[arg(long = "framework-filter")]
        framework_filter: bool,

        /// Reject sources larger than this many bytes
        #[arg(long = "max-bytes")]
        max_bytes: Option<usize>,

        /// Exit with status 1 when a Single Responsibility violation is flagged
        #[arg(long = "fail-on-violation")]
        fail_on_violation: bool,

        /// Use plain output without colors or emoji
        #[arg(long = "plain")]
        plain: bool,

        /// Terminal color mode
        #[arg(long = "color", value_enum)]
        color: Option<ColorMode>,

        /// Configuration file (defaults to the nearest .respmap.toml)
        #[arg(short, long, env = "RESPMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .respmap.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Analyze { verbosity, .. } => *verbosity,
            Self::Init { .. } => 0,
        }
    }
}

/// Framework filter override from the two opposing flags.
pub fn framework_filter_override(no_framework_filter: bool, framework_filter: bool) -> Option<bool> {
    match (no_framework_filter, framework_filter) {
        (true, _) => Some(false),
        (false, true) => Some(true),
        (false, false) => None,
    }
}
