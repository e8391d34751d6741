//! Serializable analyzer configuration.
//!
//! [`AnalyzerConfig`] is the on-disk form of a [`SegmentAnalyzer`]: which
//! segmentation strategy to use, which words to exclude, where stop words
//! come from, and whether to stem and lowercase. Every field has a default,
//! so a configuration document only needs the settings it changes.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::analyzer::{Analyzer, AnalyzerConfig};
//!
//! let config = AnalyzerConfig::from_json_str(
//!     r#"{ "segmenter": "whitespace", "exclusions": ["draft"], "stem_english": true }"#,
//! )
//! .unwrap();
//!
//! let analyzer = config.build().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("draft Cats").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "cat");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::segment::SegmentAnalyzer;
use crate::analysis::config::{DEFAULT_MAX_TOKEN_LENGTH, FilterConfig};
use crate::analysis::segmenter::SegmenterKind;
use crate::analysis::word_set::{DEFAULT_ENGLISH_STOP_WORDS_SET, WordSet};
use crate::error::Result;

/// Settings for building a [`SegmentAnalyzer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Segmentation strategy (`unicode_word`, `whitespace`, `regex:<pattern>`).
    pub segmenter: SegmenterKind,
    /// Stem English-like terms.
    pub stem_english: bool,
    /// Words rejected by their original surface text.
    pub exclusions: Vec<String>,
    /// Additional stop words.
    pub stop_words: Vec<String>,
    /// Stop word file, one word per line.
    pub stop_words_path: Option<PathBuf>,
    /// Include the default English stop words.
    pub default_stop_words: bool,
    /// Advisory maximum token length.
    pub max_token_length: usize,
    /// Fold ASCII case before filtering and lowercase emitted tokens.
    pub lowercase: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::default(),
            stem_english: false,
            exclusions: Vec::new(),
            stop_words: Vec::new(),
            stop_words_path: None,
            default_stop_words: true,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            lowercase: true,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Assemble the stop word set from its three sources.
    ///
    /// Returns `None` when no source contributes a word.
    pub fn stop_word_set(&self) -> Result<Option<WordSet>> {
        let mut set = WordSet::from_words(self.stop_words.iter().cloned());
        if self.default_stop_words {
            set = set.union(&DEFAULT_ENGLISH_STOP_WORDS_SET);
        }
        if let Some(path) = &self.stop_words_path {
            set = set.union(&WordSet::from_path(path)?);
        }

        Ok((!set.is_empty()).then_some(set))
    }

    /// Build the filter configuration described by these settings.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new()
            .fold_ascii_case(self.lowercase)
            .stem_english(self.stem_english)
            .with_max_token_length(self.max_token_length)?;

        if !self.exclusions.is_empty() {
            config = config.with_exclusions(WordSet::from_words(self.exclusions.iter().cloned()));
        }
        if let Some(stop_words) = self.stop_word_set()? {
            config = config.with_stop_words(stop_words);
        }

        Ok(config)
    }

    /// Build the analyzer.
    pub fn build(&self) -> Result<SegmentAnalyzer> {
        let analyzer = SegmentAnalyzer::with_config(self.segmenter.clone(), self.filter_config()?)?;
        Ok(analyzer.lowercase(self.lowercase))
    }
}
