//! Filter configuration shared by token streams.
//!
//! A [`FilterConfig`] is built once, wrapped in an `Arc`, and shared
//! read-only by every stream of an analyzer. It cannot be edited after
//! construction; streams pick up a different configuration only through
//! [`SegmentTokenStream::reset_with_config`](crate::analysis::stream::SegmentTokenStream::reset_with_config).
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::config::FilterConfig;
//! use segstream::analysis::word_set::WordSet;
//!
//! let config = FilterConfig::new()
//!     .with_exclusions(WordSet::from_words(["fox"]))
//!     .with_default_stop_words()
//!     .stem_english(true);
//!
//! assert!(config.is_excluded("fox"));
//! assert!(config.is_stop_word("the"));
//! assert_eq!(config.max_token_length(), 255);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::stemmer::{PorterStemmer, Stemmer};
use crate::analysis::word_set::{DEFAULT_ENGLISH_STOP_WORDS_SET, WordSet};
use crate::error::{Result, SegstreamError};

/// Default maximum allowed token length.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Rejection and normalization settings for a token stream.
#[derive(Clone)]
pub struct FilterConfig {
    exclusions: Option<WordSet>,
    stop_words: Option<WordSet>,
    fold_ascii_case: bool,
    stem_english: bool,
    stemmer: Arc<dyn Stemmer>,
    max_token_length: usize,
}

impl FilterConfig {
    /// A configuration that accepts every term, folding only ASCII case.
    pub fn new() -> Self {
        FilterConfig {
            exclusions: None,
            stop_words: None,
            fold_ascii_case: true,
            stem_english: false,
            stemmer: Arc::new(PorterStemmer::new()),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Reject terms whose original surface text is in `exclusions`.
    pub fn with_exclusions(mut self, exclusions: WordSet) -> Self {
        self.exclusions = Some(exclusions);
        self
    }

    /// Reject terms whose (possibly stemmed) text is in `stop_words`.
    pub fn with_stop_words(mut self, stop_words: WordSet) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Use the default English stop words.
    pub fn with_default_stop_words(self) -> Self {
        self.with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Lowercase ASCII letters of every term before any check (on by default).
    ///
    /// Exclusion and stop word sets are then matched against folded text,
    /// independently of stemming. Non-ASCII characters are left alone, so
    /// offsets are unaffected.
    pub fn fold_ascii_case(mut self, enabled: bool) -> Self {
        self.fold_ascii_case = enabled;
        self
    }

    /// Stem English-like terms before the stop word check.
    pub fn stem_english(mut self, enabled: bool) -> Self {
        self.stem_english = enabled;
        self
    }

    /// Replace the stemming strategy (Porter by default).
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Set the advisory maximum token length carried for stream adapters.
    ///
    /// The filter pipeline never truncates or splits tokens itself.
    pub fn with_max_token_length(mut self, max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(SegstreamError::config("max_token_length must be positive"));
        }
        self.max_token_length = max_token_length;
        Ok(self)
    }

    /// Whether `original` (the unstemmed surface text) is excluded.
    pub fn is_excluded(&self, original: &str) -> bool {
        self.exclusions
            .as_ref()
            .is_some_and(|set| set.contains(original))
    }

    /// Whether `text` (after stemming) is a stop word.
    ///
    /// An absent or empty stop word set never rejects.
    pub fn is_stop_word(&self, text: &str) -> bool {
        self.stop_words
            .as_ref()
            .is_some_and(|set| !set.is_empty() && set.contains(text))
    }

    pub fn exclusions(&self) -> Option<&WordSet> {
        self.exclusions.as_ref()
    }

    pub fn stop_words(&self) -> Option<&WordSet> {
        self.stop_words.as_ref()
    }

    pub fn folds_ascii_case(&self) -> bool {
        self.fold_ascii_case
    }

    pub fn stems_english(&self) -> bool {
        self.stem_english
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("exclusions", &self.exclusions.as_ref().map(WordSet::len))
            .field("stop_words", &self.stop_words.as_ref().map(WordSet::len))
            .field("fold_ascii_case", &self.fold_ascii_case)
            .field("stem_english", &self.stem_english)
            .field("stemmer", &self.stemmer.name())
            .field("max_token_length", &self.max_token_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::IdentityStemmer;

    #[test]
    fn test_defaults_accept_everything() {
        let config = FilterConfig::new();
        assert!(!config.is_excluded("the"));
        assert!(!config.is_stop_word("the"));
        assert!(!config.stems_english());
        assert!(config.folds_ascii_case());
        assert_eq!(config.stemmer().name(), "porter");
        assert_eq!(config.max_token_length(), DEFAULT_MAX_TOKEN_LENGTH);
    }

    #[test]
    fn test_predicates_are_independent() {
        let config = FilterConfig::new()
            .with_exclusions(WordSet::from_words(["fox"]))
            .with_stop_words(WordSet::from_words(["the"]));

        assert!(config.is_excluded("fox"));
        assert!(!config.is_stop_word("fox"));
        assert!(config.is_stop_word("the"));
        assert!(!config.is_excluded("the"));
    }

    #[test]
    fn test_empty_stop_words_never_reject() {
        let config = FilterConfig::new().with_stop_words(WordSet::new());
        assert!(!config.is_stop_word(""));
        assert!(!config.is_stop_word("the"));
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        assert!(FilterConfig::new().with_max_token_length(0).is_err());
        let config = FilterConfig::new().with_max_token_length(16).unwrap();
        assert_eq!(config.max_token_length(), 16);
    }

    #[test]
    fn test_custom_stemmer() {
        let config = FilterConfig::new().with_stemmer(Arc::new(IdentityStemmer::new()));
        assert_eq!(config.stemmer().stem("running"), "running");
        assert!(format!("{config:?}").contains("identity"));
    }
}
