//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing chain a field is indexed
//! with:
//!
//! ```text
//! Raw Text → Segmenter → Filter Pipeline → Stream Adapter → Index
//!                          (fold, stem,      (lowercase)
//!                           stop, exclusions)
//! ```
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::analyzer::Analyzer;
//! use segstream::analysis::analyzer::SegmentAnalyzer;
//!
//! let analyzer = SegmentAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Quick fox").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "quick");
//! assert_eq!(tokens[0].position_increment, 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many
/// concurrently indexed documents; each call builds an independent stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
