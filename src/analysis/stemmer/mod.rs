//! Stemming strategies for English-like terms.
//!
//! The filter pipeline depends only on the [`Stemmer`] trait; the concrete
//! algorithm is chosen when the filter configuration is built.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::stemmer::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem(""), "");
//! ```

/// Trait for stemming algorithms.
///
/// Implementations must be total and deterministic: every input, the empty
/// string included, maps to exactly one output and nothing else is touched.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod porter;

pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;
