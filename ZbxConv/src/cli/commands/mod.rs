//! CLI subcommands

use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod detect;
mod engine;
mod execute;
pub mod versions;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a template between XML, JSON and YAML
    Convert {
        /// Source template
        #[arg(short, long)]
        source: PathBuf,

        /// Destination file (writes to stdout if not specified)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Input format (auto-detected from extension if not specified)
        #[arg(short = 'i', long)]
        input_format: Option<String>,

        /// Output format (auto-detected from extension if not specified)
        #[arg(short = 'o', long)]
        output_format: Option<String>,

        /// Engine configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the version a template declares
    Detect {
        /// Source template
        #[arg(short, long)]
        source: PathBuf,

        /// Input format (auto-detected from extension if not specified)
        #[arg(short = 'i', long)]
        input_format: Option<String>,

        /// Engine configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported versions with their schema and normalization rules
    Versions {
        /// Engine configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
