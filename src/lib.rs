//! # segstream
//!
//! Pull-based token streams over pluggable text segmenters.
//!
//! ## Features
//!
//! - Any segmentation engine behind a two-method [`Segmenter`](analysis::Segmenter) trait
//! - Exclusion and stop word rejection with position-gap accounting
//! - Optional stemming of English-like terms (Porter by default)
//! - Offsets that always cover the original surface text
//! - JSON-configurable analyzers and a small command line front end

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::{
        Analyzer, AnalyzerConfig, FilterConfig, RawTerm, SegmentAnalyzer, SegmentTokenStream,
        Segmenter, SegmenterKind, Stemmer, Token, TokenType, WordSet,
    };
    pub use crate::error::{Result, SegstreamError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
