//! Integration tests for the token filter pipeline.
//!
//! The pipeline is driven by a space-splitting test segmenter whose type
//! tagging is under test control, so that every rejection path can be
//! reached from plain input strings.

use std::sync::Arc;

use segstream::analysis::segmenter::{Segmenter, SegmenterKind};
use segstream::analysis::stemmer::{PorterStemmer, Stemmer};
use segstream::analysis::*;
use segstream::error::Result;

/// Splits on single spaces and tags words starting with `@` as CJK (the
/// marker is kept in the surface text).
struct TaggingSegmenter {
    terms: Vec<RawTerm>,
    cursor: usize,
}

impl TaggingSegmenter {
    fn boxed(text: &str) -> Box<dyn Segmenter> {
        let mut segmenter = TaggingSegmenter {
            terms: Vec::new(),
            cursor: 0,
        };
        segmenter.rebind(text);
        Box::new(segmenter)
    }
}

impl Segmenter for TaggingSegmenter {
    fn next_term(&mut self) -> Option<RawTerm> {
        let term = self.terms.get(self.cursor).cloned();
        if term.is_some() {
            self.cursor += 1;
        }
        term
    }

    fn rebind(&mut self, text: &str) {
        self.cursor = 0;
        self.terms = text
            .split(' ')
            .scan(0, |offset, word| {
                let start = *offset;
                *offset += word.len() + 1;
                Some((start, word))
            })
            .filter(|(_, word)| !word.is_empty())
            .map(|(start, word)| {
                let token_type = if word.starts_with('@') {
                    TokenType::Cjk
                } else {
                    TokenType::Alphanum
                };
                RawTerm::new(word, token_type, start)
            })
            .collect();
    }

    fn name(&self) -> &'static str {
        "tagging"
    }
}

/// Maps a handful of words, leaves the rest alone.
struct TableStemmer;

impl Stemmer for TableStemmer {
    fn stem(&self, word: &str) -> String {
        match word {
            "running" => "run",
            "thee" => "the",
            "foxes" => "fox",
            other => other,
        }
        .to_string()
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

const INPUTS: &[&str] = &[
    "",
    "the",
    "the quick @狐",
    "running foxes jump over thee lazy dogs",
    "fox fox fox",
    "the the the quick",
    "@a @b running the",
    "jump  over   gaps",
];

fn configs() -> Vec<FilterConfig> {
    vec![
        FilterConfig::new(),
        FilterConfig::new().with_stop_words(WordSet::from_words(["the"])),
        FilterConfig::new()
            .with_exclusions(WordSet::from_words(["fox", "foxes", "@b"]))
            .with_stop_words(WordSet::from_words(["the", "run"]))
            .with_stemmer(Arc::new(TableStemmer))
            .stem_english(true),
        FilterConfig::new()
            .with_exclusions(WordSet::from_words(["running"]))
            .with_stop_words(WordSet::from_words(["fox", "@狐"]))
            .with_stemmer(Arc::new(TableStemmer))
            .stem_english(false),
    ]
}

fn stream(text: &str, config: &FilterConfig) -> SegmentTokenStream {
    SegmentTokenStream::new(TaggingSegmenter::boxed(text), Arc::new(config.clone()))
}

fn raw_count(text: &str) -> usize {
    let mut segmenter = TaggingSegmenter::boxed(text);
    std::iter::from_fn(|| segmenter.next_term()).count()
}

#[test]
fn test_start_offsets_are_monotonic() {
    for config in configs() {
        for input in INPUTS {
            let tokens: Vec<Token> = stream(input, &config).collect();
            assert!(
                tokens
                    .windows(2)
                    .all(|w| w[0].start_offset <= w[1].start_offset),
                "offsets out of order for {input:?}"
            );
        }
    }
}

#[test]
fn test_increments_account_for_every_raw_term() {
    for config in configs() {
        for input in INPUTS {
            let mut tokens = stream(input, &config);
            let emitted: usize = tokens.by_ref().map(|t| t.position_increment).sum();

            assert_eq!(
                emitted + tokens.final_position_increment(),
                raw_count(input),
                "increments do not add up for {input:?}"
            );
        }
    }
}

#[test]
fn test_every_token_has_positive_increment_and_consistent_position() {
    for config in configs() {
        for input in INPUTS {
            let mut expected_position = 0;
            for token in stream(input, &config) {
                assert!(token.position_increment >= 1);
                expected_position += token.position_increment;
                assert_eq!(token.position, expected_position - 1);
            }
        }
    }
}

#[test]
fn test_exclusions_checked_against_original_text() {
    for config in configs() {
        for input in INPUTS {
            for token in stream(input, &config) {
                let original = &input[token.start_offset..token.end_offset];
                assert!(
                    !config.is_excluded(original),
                    "excluded {original:?} was emitted from {input:?}"
                );
            }
        }
    }
}

#[test]
fn test_stop_words_checked_against_emitted_text() {
    for config in configs() {
        for input in INPUTS {
            for token in stream(input, &config) {
                assert!(
                    !config.is_stop_word(&token.text),
                    "stop word {:?} was emitted from {input:?}",
                    token.text
                );
            }
        }
    }
}

#[test]
fn test_reset_replays_identical_sequence() {
    for config in configs() {
        for input in INPUTS {
            let mut tokens = stream("unrelated prefix text", &config);
            let _ = tokens.next_token();

            tokens.reset(input);
            let first: Vec<Token> = tokens.by_ref().collect();
            let first_final = tokens.final_position_increment();

            tokens.reset(input);
            let second: Vec<Token> = tokens.by_ref().collect();

            assert_eq!(first, second);
            assert_eq!(first_final, tokens.final_position_increment());
        }
    }
}

#[test]
fn test_exhaustion_is_terminal() {
    for config in configs() {
        for input in INPUTS {
            let mut tokens = stream(input, &config);
            while tokens.next_token().is_some() {}

            assert_eq!(tokens.state(), StreamState::Exhausted);
            for _ in 0..3 {
                assert!(tokens.next_token().is_none());
            }
        }
    }
}

#[test]
fn test_stop_word_then_other_script_scenario() {
    let config = FilterConfig::new().with_stop_words(WordSet::from_words(["the"]));
    let tokens: Vec<Token> = stream("the quick @狐", &config).collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "quick");
    assert_eq!(tokens[0].position_increment, 2);
    assert_eq!(tokens[1].text, "@狐");
    assert_eq!(tokens[1].position_increment, 1);
    assert_eq!(tokens[1].token_type, TokenType::Cjk);
}

#[test]
fn test_exclusion_does_not_see_stemmed_text_scenario() {
    let config = FilterConfig::new()
        .with_exclusions(WordSet::from_words(["fox"]))
        .with_stemmer(Arc::new(TableStemmer))
        .stem_english(true);
    let tokens: Vec<Token> = stream("running", &config).collect();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "run");
    assert_eq!(tokens[0].position_increment, 1);
    assert_eq!(tokens[0].start_offset, 0);
    assert_eq!(tokens[0].end_offset, 7);
}

#[test]
fn test_empty_input_scenario() {
    let mut tokens = stream("", &FilterConfig::new());
    assert!(tokens.next_token().is_none());
    assert_eq!(tokens.final_position_increment(), 0);
}

#[test]
fn test_stemmed_form_rejected_as_stop_word() {
    // "thee" stems to "the", which is a stop word; "thee" itself is not.
    let config = FilterConfig::new()
        .with_stop_words(WordSet::from_words(["the"]))
        .with_stemmer(Arc::new(TableStemmer))
        .stem_english(true);
    let texts: Vec<String> = stream("thee lazy", &config).map(|t| t.text).collect();
    assert_eq!(texts, vec!["lazy"]);
}

#[test]
fn test_other_scripts_are_never_stemmed() {
    let config = FilterConfig::new()
        .with_stemmer(Arc::new(PorterStemmer))
        .stem_english(true);
    let texts: Vec<String> = stream("@running running", &config)
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, vec!["@running", "run"]);
}

#[test]
fn test_configuration_swapped_at_reset() -> Result<()> {
    let mut tokens = stream("the fox", &FilterConfig::new());
    assert_eq!(tokens.by_ref().count(), 2);

    let strict = Arc::new(FilterConfig::new().with_stop_words(WordSet::from_words(["the"])));
    tokens.reset_with_config("the fox", Arc::clone(&strict));
    let texts: Vec<String> = tokens.map(|t| t.text).collect();
    assert_eq!(texts, vec!["fox"]);

    Ok(())
}

#[test]
fn test_builtin_segmenters_keep_offsets_monotonic() -> Result<()> {
    let text = "Running, jumping; 東京タワー and x86_64 builds (2024) résumés";
    for kind in [
        SegmenterKind::UnicodeWord,
        SegmenterKind::Whitespace,
        "regex:[\\p{L}\\d_]+".parse::<SegmenterKind>()?,
    ] {
        let analyzer = SegmentAnalyzer::with_config(kind.clone(), FilterConfig::new())?
            .stem_english(true);
        let tokens: Vec<Token> = analyzer.token_stream(text).collect();

        assert!(!tokens.is_empty(), "{kind} produced nothing");
        assert!(
            tokens
                .windows(2)
                .all(|w| w[0].start_offset <= w[1].start_offset)
        );
        for token in &tokens {
            assert!(token.end_offset <= text.len());
            assert!(text.is_char_boundary(token.start_offset));
            assert!(text.is_char_boundary(token.end_offset));
        }
    }
    Ok(())
}
