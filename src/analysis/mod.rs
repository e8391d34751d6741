//! Text analysis module for segstream.
//!
//! This module turns raw text into filtered, position-annotated tokens:
//! segmenters produce raw terms, the token filter pipeline stems and rejects
//! them, and analyzers wrap the whole chain for indexing code.

pub mod analyzer;
pub mod config;
pub mod segmenter;
pub mod stemmer;
pub mod stream;
pub mod token;
pub mod token_filter;
pub mod word_set;

// Re-export commonly used types
pub use analyzer::{Analyzer, AnalyzerConfig, SegmentAnalyzer};
pub use config::FilterConfig;
pub use segmenter::{Segmenter, SegmenterKind};
pub use stemmer::Stemmer;
pub use stream::{SegmentTokenStream, StreamState};
pub use token::{RawTerm, Token, TokenStream, TokenType};
pub use word_set::WordSet;
