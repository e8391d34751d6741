//! The token filter pipeline.
//!
//! [`SegmentTokenStream`] wraps one [`Segmenter`] and turns its raw terms into
//! accepted [`Token`]s. Each pull consumes raw terms until one survives
//! filtering:
//!
//! 1. ASCII case is folded (unless disabled), then English-like terms are
//!    stemmed when the configuration asks for it.
//! 2. A term is rejected if its unstemmed text is an exclusion, or its
//!    (possibly stemmed) text is a stop word.
//! 3. The first surviving term is emitted with a position increment equal
//!    to the number of raw terms consumed by this pull.
//!
//! Offsets always cover the original surface text, so `end_offset -
//! start_offset` may exceed `text.len()` for stemmed tokens.
//!
//! ```text
//! raw:    the(EN)  quick(EN)  狐(CJK)
//! stop:   {the}
//! tokens: quick +2, 狐 +1
//! ```
//!
//! Once the segmenter runs dry the stream is exhausted and stays so until
//! [`SegmentTokenStream::reset`] rebinds it to new input.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use segstream::analysis::config::FilterConfig;
//! use segstream::analysis::segmenter::SegmenterKind;
//! use segstream::analysis::stream::SegmentTokenStream;
//!
//! let config = Arc::new(FilterConfig::new().with_default_stop_words());
//! let segmenter = SegmenterKind::UnicodeWord.build("the quick 狐").unwrap();
//! let mut stream = SegmentTokenStream::new(segmenter, config);
//!
//! let quick = stream.next_token().unwrap();
//! assert_eq!(quick.text, "quick");
//! assert_eq!(quick.position_increment, 2);
//!
//! let fox = stream.next_token().unwrap();
//! assert_eq!(fox.text, "狐");
//! assert_eq!(fox.position_increment, 1);
//!
//! assert!(stream.next_token().is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::analysis::config::FilterConfig;
use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::Token;

/// Lifecycle of a stream between resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    /// The segmenter may still produce terms.
    Streaming,
    /// The segmenter returned no term on the most recent pull.
    Exhausted,
}

/// A pull-based stream of accepted tokens over one segmenter.
///
/// One consumer per stream: every operation takes `&mut self`. The
/// configuration is shared and never mutated; many streams may hold the
/// same `Arc<FilterConfig>` concurrently.
pub struct SegmentTokenStream {
    segmenter: Box<dyn Segmenter>,
    config: Arc<FilterConfig>,
    state: StreamState,
    /// Raw terms consumed up to and including the last emitted token.
    consumed_through_last: usize,
    /// Raw terms consumed after the last emitted token, set on exhaustion.
    final_increment: usize,
}

impl SegmentTokenStream {
    /// Create a stream over an already bound segmenter.
    pub fn new(segmenter: Box<dyn Segmenter>, config: Arc<FilterConfig>) -> Self {
        debug!(
            "token stream over '{}' segmenter, {:?}",
            segmenter.name(),
            config
        );
        SegmentTokenStream {
            segmenter,
            config,
            state: StreamState::Streaming,
            consumed_through_last: 0,
            final_increment: 0,
        }
    }

    /// Pull the next accepted token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.state == StreamState::Exhausted {
            return None;
        }

        let mut consumed = 0;
        loop {
            let Some(mut term) = self.segmenter.next_term() else {
                self.state = StreamState::Exhausted;
                self.final_increment = consumed;
                debug!(
                    "token stream exhausted after {} raw terms",
                    self.consumed_through_last + consumed
                );
                return None;
            };
            consumed += 1;

            let raw_len = term.text.len();
            if self.config.folds_ascii_case() {
                term.text.make_ascii_lowercase();
            }
            let original = if self.config.stems_english() && term.token_type.is_english_like() {
                let stemmed = self.config.stemmer().stem(&term.text);
                Some(std::mem::replace(&mut term.text, stemmed))
            } else {
                None
            };
            let original_text = original.as_deref().unwrap_or(term.text.as_str());

            if self.config.is_excluded(original_text) {
                trace!("excluded '{original_text}' at {}", term.start_offset);
                continue;
            }
            if self.config.is_stop_word(&term.text) {
                trace!("stop word '{}' at {}", term.text, term.start_offset);
                continue;
            }

            self.consumed_through_last += consumed;
            let token = Token::with_offsets(
                term.text,
                self.consumed_through_last - 1,
                term.start_offset,
                term.start_offset + raw_len,
            )
            .with_position_increment(consumed)
            .with_token_type(term.token_type);

            return Some(token);
        }
    }

    /// Rebind to new input, discarding all state of the previous stream.
    pub fn reset(&mut self, text: &str) {
        self.segmenter.rebind(text);
        self.state = StreamState::Streaming;
        self.consumed_through_last = 0;
        self.final_increment = 0;
    }

    /// Rebind to new input and replace the configuration snapshot.
    pub fn reset_with_config(&mut self, text: &str, config: Arc<FilterConfig>) {
        self.config = config;
        self.reset(text);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Raw terms rejected after the last accepted token.
    ///
    /// Only meaningful once the stream is exhausted; adding it to the sum of
    /// all emitted position increments gives the total raw term count.
    pub fn final_position_increment(&self) -> usize {
        self.final_increment
    }

    /// The configuration snapshot in use.
    pub fn config(&self) -> &Arc<FilterConfig> {
        &self.config
    }
}

impl Iterator for SegmentTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl fmt::Debug for SegmentTokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTokenStream")
            .field("segmenter", &self.segmenter.name())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::analysis::stemmer::Stemmer;
    use crate::analysis::token::{RawTerm, TokenType};
    use crate::analysis::word_set::WordSet;

    /// Replays a fixed list of raw terms; `rebind` restarts the list.
    struct Scripted {
        terms: Vec<RawTerm>,
        queue: VecDeque<RawTerm>,
    }

    impl Scripted {
        fn new(terms: Vec<RawTerm>) -> Box<dyn Segmenter> {
            Box::new(Scripted {
                queue: terms.iter().cloned().collect(),
                terms,
            })
        }
    }

    impl Segmenter for Scripted {
        fn next_term(&mut self) -> Option<RawTerm> {
            self.queue.pop_front()
        }

        fn rebind(&mut self, _text: &str) {
            self.queue = self.terms.iter().cloned().collect();
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    struct FixedStemmer;

    impl Stemmer for FixedStemmer {
        fn stem(&self, word: &str) -> String {
            match word {
                "running" => "run".to_string(),
                "the" => "th".to_string(),
                other => other.to_string(),
            }
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn en(text: &str, offset: usize) -> RawTerm {
        RawTerm::new(text, TokenType::Alphanum, offset)
    }

    fn other(text: &str, offset: usize) -> RawTerm {
        RawTerm::new(text, TokenType::Cjk, offset)
    }

    fn stream(terms: Vec<RawTerm>, config: FilterConfig) -> SegmentTokenStream {
        SegmentTokenStream::new(Scripted::new(terms), Arc::new(config))
    }

    #[test]
    fn test_stop_words_leave_gaps() {
        let config = FilterConfig::new().with_stop_words(WordSet::from_words(["the"]));
        let mut stream = stream(
            vec![en("the", 0), en("quick", 4), other("狐", 10)],
            config,
        );

        let first = stream.next_token().unwrap();
        assert_eq!(first.text, "quick");
        assert_eq!(first.position_increment, 2);
        assert_eq!(first.position, 1);
        assert_eq!((first.start_offset, first.end_offset), (4, 9));

        let second = stream.next_token().unwrap();
        assert_eq!(second.text, "狐");
        assert_eq!(second.position_increment, 1);
        assert_eq!(second.position, 2);
        assert_eq!((second.start_offset, second.end_offset), (10, 13));

        assert!(stream.next_token().is_none());
    }

    #[test]
    fn test_exclusion_uses_original_text() {
        let config = FilterConfig::new()
            .with_exclusions(WordSet::from_words(["fox"]))
            .with_stemmer(Arc::new(FixedStemmer))
            .stem_english(true);
        let tokens: Vec<Token> = stream(vec![en("running", 0)], config).collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "run");
        assert_eq!(tokens[0].position_increment, 1);
        // Offsets keep the original span
        assert_eq!(tokens[0].end_offset, 7);
    }

    #[test]
    fn test_exclusion_applies_to_unstemmed_terms() {
        let config = FilterConfig::new().with_exclusions(WordSet::from_words(["狐", "fox"]));
        let tokens: Vec<Token> =
            stream(vec![other("狐", 0), en("fox", 4), en("den", 8)], config).collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "den");
        assert_eq!(tokens[0].position_increment, 3);
    }

    #[test]
    fn test_exclusion_ignores_stemmed_form() {
        let config = FilterConfig::new()
            .with_exclusions(WordSet::from_words(["run"]))
            .with_stemmer(Arc::new(FixedStemmer))
            .stem_english(true);
        let tokens: Vec<Token> = stream(vec![en("running", 0), en("run", 8)], config).collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "run");
        assert_eq!(tokens[0].start_offset, 0);
    }

    #[test]
    fn test_stop_words_use_stemmed_text() {
        let config = FilterConfig::new()
            .with_stop_words(WordSet::from_words(["the"]))
            .with_stemmer(Arc::new(FixedStemmer))
            .stem_english(true);
        // "the" stems to "th", which is not a stop word
        let tokens: Vec<Token> = stream(vec![en("the", 0)], config).collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "th");
    }

    #[test]
    fn test_stemming_only_for_english_like_terms() {
        let config = FilterConfig::new()
            .with_stemmer(Arc::new(FixedStemmer))
            .stem_english(true);
        let tokens: Vec<Token> = stream(vec![other("running", 0)], config).collect();

        assert_eq!(tokens[0].text, "running");
    }

    #[test]
    fn test_stemming_disabled() {
        let config = FilterConfig::new().with_stemmer(Arc::new(FixedStemmer));
        let tokens: Vec<Token> = stream(vec![en("running", 0)], config).collect();

        assert_eq!(tokens[0].text, "running");
    }

    #[test]
    fn test_case_folded_before_checks_with_and_without_stemming() {
        for stem in [false, true] {
            let config = FilterConfig::new()
                .with_exclusions(WordSet::from_words(["draft"]))
                .with_default_stop_words()
                .stem_english(stem);
            let tokens: Vec<Token> = stream(
                vec![en("The", 0), en("Draft", 4), en("Fox", 10), other("Ü", 14)],
                config,
            )
            .collect();

            let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, vec!["fox", "Ü"], "stem_english = {stem}");
            assert_eq!(tokens[0].position_increment, 3);
            assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (10, 13));
        }
    }

    #[test]
    fn test_case_folding_disabled() {
        let config = FilterConfig::new()
            .with_default_stop_words()
            .fold_ascii_case(false);
        let texts: Vec<String> = stream(vec![en("The", 0), en("the", 4)], config)
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["The"]);
    }

    #[test]
    fn test_long_tokens_are_not_truncated() {
        let config = FilterConfig::new().with_max_token_length(4).unwrap();
        let tokens: Vec<Token> = stream(vec![en("extraordinary", 0)], config).collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "extraordinary");
        assert_eq!(tokens[0].end_offset, 13);
        assert_eq!(tokens[0].position_increment, 1);
    }

    #[test]
    fn test_empty_segmenter() {
        let mut stream = stream(Vec::new(), FilterConfig::new());
        assert!(stream.next_token().is_none());
        assert_eq!(stream.state(), StreamState::Exhausted);
        assert_eq!(stream.final_position_increment(), 0);
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut stream = stream(vec![en("a", 0)], FilterConfig::new());
        assert!(stream.next_token().is_some());
        assert!(stream.next_token().is_none());
        assert!(stream.next_token().is_none());
        assert!(stream.next_token().is_none());
    }

    #[test]
    fn test_trailing_rejections_reported() {
        let config = FilterConfig::new().with_default_stop_words();
        let mut stream = stream(vec![en("fox", 0), en("of", 4), en("the", 7)], config);

        assert_eq!(stream.next_token().unwrap().position_increment, 1);
        assert!(stream.next_token().is_none());
        assert_eq!(stream.final_position_increment(), 2);
    }

    #[test]
    fn test_reset_restarts_accounting() {
        let config = FilterConfig::new().with_default_stop_words();
        let mut stream = stream(vec![en("the", 0), en("fox", 4)], config);

        let first: Vec<Token> = stream.by_ref().collect();
        stream.reset("ignored by scripted segmenter");
        assert_eq!(stream.state(), StreamState::Streaming);
        let second: Vec<Token> = stream.by_ref().collect();

        assert_eq!(first, second);
        assert_eq!(second[0].position_increment, 2);
        assert_eq!(second[0].position, 1);
    }

    #[test]
    fn test_reset_with_config_replaces_snapshot() {
        let mut stream = stream(vec![en("the", 0), en("fox", 4)], FilterConfig::new());
        assert_eq!(stream.by_ref().count(), 2);

        let stopping = Arc::new(FilterConfig::new().with_default_stop_words());
        stream.reset_with_config("", Arc::clone(&stopping));

        let tokens: Vec<Token> = stream.by_ref().collect();
        assert_eq!(tokens.len(), 1);
        assert!(Arc::ptr_eq(stream.config(), &stopping));
    }

    #[test]
    fn test_config_shared_between_streams() {
        let config = Arc::new(FilterConfig::new().with_default_stop_words());
        let mut a = SegmentTokenStream::new(Scripted::new(vec![en("a", 0)]), Arc::clone(&config));
        let mut b = SegmentTokenStream::new(
            Scripted::new(vec![en("b", 0)]),
            Arc::clone(&config),
        );

        assert!(a.next_token().is_none());
        assert_eq!(b.next_token().unwrap().text, "b");
        assert_eq!(Arc::strong_count(&config), 3);
    }
}
