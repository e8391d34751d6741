//! Analyzer built around a segmenter and the token filter pipeline.
//!
//! [`SegmentAnalyzer`] is the construction surface: it validates the
//! segmentation strategy once, owns the shared [`FilterConfig`] snapshot, and
//! stamps out one [`SegmentTokenStream`] per input text. Its
//! [`Analyzer::analyze`] output additionally passes through the
//! [`LowercaseFilter`] stream adapter (enabled by default).
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::analyzer::SegmentAnalyzer;
//! use segstream::analysis::segmenter::SegmenterKind;
//! use segstream::analysis::word_set::WordSet;
//!
//! let analyzer = SegmentAnalyzer::with_exclusions(
//!     SegmenterKind::Whitespace,
//!     WordSet::from_words(["lazy"]),
//! )
//! .unwrap()
//! .stem_english(true);
//!
//! let tokens: Vec<_> = analyzer.token_stream("the lazy dogs").collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "dog");
//! assert_eq!(tokens[0].position_increment, 3);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::config::FilterConfig;
use crate::analysis::segmenter::{SegmenterFactory, SegmenterKind};
use crate::analysis::stream::SegmentTokenStream;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, LowercaseFilter};
use crate::analysis::word_set::WordSet;
use crate::error::Result;

/// An analyzer producing filtered token streams from a segmentation strategy.
#[derive(Clone)]
pub struct SegmentAnalyzer {
    segmenter: SegmenterKind,
    factory: SegmenterFactory,
    config: Arc<FilterConfig>,
    lowercase: bool,
}

impl SegmentAnalyzer {
    /// Unicode word segmentation with the default English stop words.
    pub fn new() -> Result<Self> {
        Self::with_segmenter(SegmenterKind::default())
    }

    /// The given segmentation strategy with the default English stop words.
    pub fn with_segmenter(segmenter: SegmenterKind) -> Result<Self> {
        Self::with_config(segmenter, FilterConfig::new().with_default_stop_words())
    }

    /// Like [`SegmentAnalyzer::with_segmenter`], also rejecting `exclusions`.
    pub fn with_exclusions(segmenter: SegmenterKind, exclusions: WordSet) -> Result<Self> {
        Self::with_config(
            segmenter,
            FilterConfig::new()
                .with_exclusions(exclusions)
                .with_default_stop_words(),
        )
    }

    /// Explicit exclusions and a stop word set replacing the default one.
    pub fn with_stop_words(
        segmenter: SegmenterKind,
        exclusions: Option<WordSet>,
        stop_words: WordSet,
    ) -> Result<Self> {
        let mut config = FilterConfig::new().with_stop_words(stop_words);
        if let Some(exclusions) = exclusions {
            config = config.with_exclusions(exclusions);
        }
        Self::with_config(segmenter, config)
    }

    /// Full control over the filter configuration.
    ///
    /// Fails if the segmentation strategy cannot be instantiated.
    pub fn with_config(segmenter: SegmenterKind, config: FilterConfig) -> Result<Self> {
        let factory = segmenter.factory()?;
        debug!("segment analyzer: segmenter={segmenter}, {config:?}");

        Ok(SegmentAnalyzer {
            segmenter,
            factory,
            config: Arc::new(config),
            lowercase: true,
        })
    }

    /// Enable or disable stemming of English-like terms.
    ///
    /// Installs a new configuration snapshot; streams already created keep
    /// the one they were built with.
    pub fn stem_english(mut self, enabled: bool) -> Self {
        let config = (*self.config).clone().stem_english(enabled);
        self.config = Arc::new(config);
        self
    }

    /// Enable or disable case folding.
    ///
    /// Controls both the ASCII fold applied before stop word and exclusion
    /// checks and the Unicode lowercase adapter applied to emitted tokens.
    /// Stemmed terms come out of Porter lowercased either way.
    pub fn lowercase(mut self, enabled: bool) -> Self {
        if self.config.folds_ascii_case() != enabled {
            let config = (*self.config).clone().fold_ascii_case(enabled);
            self.config = Arc::new(config);
        }
        self.lowercase = enabled;
        self
    }

    /// Create the filter pipeline for `text`, without any adapter.
    pub fn token_stream(&self, text: &str) -> SegmentTokenStream {
        SegmentTokenStream::new((self.factory)(text), Arc::clone(&self.config))
    }

    /// Analyze `text` eagerly.
    ///
    /// Returns the adapted tokens together with the number of raw terms
    /// rejected after the last one (see
    /// [`SegmentTokenStream::final_position_increment`]).
    pub fn analyze_all(&self, text: &str) -> Result<(Vec<Token>, usize)> {
        let mut stream = self.token_stream(text);
        let accepted: Vec<Token> = stream.by_ref().collect();
        let tokens = self.adapt(Box::new(accepted.into_iter()))?.collect();
        Ok((tokens, stream.final_position_increment()))
    }

    /// Apply the stream adapters to accepted tokens.
    fn adapt(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.lowercase {
            LowercaseFilter::new().filter(tokens)
        } else {
            Ok(tokens)
        }
    }

    /// Get the segmentation strategy.
    pub fn segmenter_kind(&self) -> &SegmenterKind {
        &self.segmenter
    }

    /// Get the shared filter configuration.
    pub fn config(&self) -> &Arc<FilterConfig> {
        &self.config
    }

    /// Whether [`Analyzer::analyze`] lowercases tokens.
    pub fn lowercases(&self) -> bool {
        self.lowercase
    }

    /// Advisory maximum token length for adapters.
    pub fn max_token_length(&self) -> usize {
        self.config.max_token_length()
    }
}

impl Analyzer for SegmentAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.adapt(Box::new(self.token_stream(text)))
    }

    fn name(&self) -> &'static str {
        "segment"
    }
}

impl fmt::Debug for SegmentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentAnalyzer")
            .field("segmenter", &self.segmenter)
            .field("config", &self.config)
            .field("lowercase", &self.lowercase)
            .finish()
    }
}
