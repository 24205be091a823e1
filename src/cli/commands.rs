//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptsel")]
#[command(about = "Expand @tag@ directives in prompts from YAML tag files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Do not write sample tag files
        #[arg(long)]
        no_samples: bool,
    },

    /// Expand directives in a prompt (e.g., "@2$$colors:warm@ shirt")
    Expand {
        /// Prompt text
        prompt: String,

        /// Negative prompt text
        #[arg(short, long, default_value = "")]
        negative: String,

        /// High-resolution pass prompt
        #[arg(long)]
        hires: Option<String>,

        /// High-resolution pass negative prompt
        #[arg(long)]
        hires_negative: Option<String>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of batch items to expand
        #[arg(short, long, default_value_t = 1)]
        batch: usize,
    },

    /// List namespaces, or the tag paths under PATH (e.g., outfits:casual)
    Tags {
        path: Option<String>,
    },

    /// List tag files
    Files,

    /// Report tag files that failed to load
    Check,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
