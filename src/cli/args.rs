//! Command line argument parsing for the segstream CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::SegmenterKind;

/// segstream - segment, filter and inspect token streams
#[derive(Parser, Debug, Clone)]
#[command(name = "segstream")]
#[command(about = "Segment text into filtered, position-annotated tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SegstreamArgs {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SegstreamArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the accepted tokens
    Analyze(AnalyzeArgs),

    /// List the built-in segmentation strategies
    Segmenters,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads --file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyzer configuration file (JSON); flags below override it
    #[arg(short, long, value_name = "PATH", env = "SEGSTREAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Segmentation strategy: unicode_word, whitespace or regex:<pattern>
    #[arg(short, long, value_name = "SEGMENTER")]
    pub segmenter: Option<SegmenterKind>,

    /// Stem English-like terms
    #[arg(long)]
    pub stem: bool,

    /// Exclude a word (matched against the unstemmed text); repeatable
    #[arg(short = 'x', long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Stop word file, one word per line
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Do not include the default English stop words
    #[arg(long)]
    pub no_default_stop_words: bool,

    /// Do not fold case, neither before filtering nor on output
    #[arg(long)]
    pub no_lowercase: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
