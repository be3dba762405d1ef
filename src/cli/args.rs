//! Command line argument parsing for Ejaan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Ejaan - spelling suggestions from a weighted edit distance
#[derive(Parser, Debug, Clone)]
#[command(name = "ejaan")]
#[command(about = "Suggest likely correct spellings of a word against a vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EjaanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", global = true, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON file overriding the default cost tables
    #[arg(long, global = true, value_name = "COSTS_FILE")]
    pub costs: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EjaanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for a word
    Suggest(SuggestArgs),

    /// Show the weighted edit distance between two words
    Distance(DistanceArgs),
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to check (prompted for on stdin when omitted)
    #[arg(value_name = "WORD")]
    pub word: Option<String>,

    /// Tab-separated vocabulary file; the first column holds the words
    #[arg(short = 'd', long, env = "EJAAN_VOCABULARY", value_name = "VOCABULARY_FILE")]
    pub vocabulary: PathBuf,

    /// Maximum number of suggestions to return
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,

    /// Compute distances in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Show distance and score next to each suggestion
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Word to transform
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Word to transform into
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
