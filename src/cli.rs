use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelpress")]
#[command(author, version, about = "Supervised HandBrakeCLI encoding for ripped movies")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging, including HandBrakeCLI output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a single file and remove it once the encode completed
    Compress {
        /// Input file to encode
        #[arg(required = true)]
        input: PathBuf,

        /// Name of the encoded file, without extension (defaults to the input's stem;
        /// required when the input is already an .mkv)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Encode every movie listed in a queue file, one at a time
    Queue {
        /// Queue file with [[movie]] entries
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
