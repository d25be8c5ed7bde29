use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::level::StackingRule;

/// hanoi-peg - Inspect a single Towers of Hanoi peg
#[derive(Parser, Debug)]
#[command(name = "hanoi-peg")]
#[command(about = "Render and validate a single Towers of Hanoi peg")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the picture of a peg
    Show {
        /// Number of disks in the game
        #[arg(short, long, default_value_t = 3)]
        difficulty: u8,

        /// Leave the peg empty instead of loading every disk
        #[arg(short, long)]
        empty: bool,

        /// Stacking rule (strict, lenient)
        #[arg(short, long, default_value_t = StackingRule::Strict)]
        rule: StackingRule,

        /// Read settings from a configuration file (overrides the other flags)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a tower configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
