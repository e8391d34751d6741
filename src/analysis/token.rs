//! Token types and utilities for text analysis.
//!
//! Two record types flow through a segstream pipeline:
//!
//! - [`RawTerm`] - a candidate produced by a segmenter, before any filtering
//! - [`Token`] - a term that survived filtering, with position bookkeeping
//!
//! # Position Increments
//!
//! Rejected terms still occupy a position. The `position_increment` of an
//! accepted token counts every raw term consumed since the previous accepted
//! token, itself included, so phrase and proximity queries see the gaps:
//!
//! ```text
//! Raw terms: "the"  "quick"  "of"  "fox"
//! Stop words: {the, of}
//!
//! Tokens:
//!   "quick" (pos_inc=2, position=1)
//!   "fox"   (pos_inc=2, position=3)
//! ```
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 1, 6, 11)
//!     .with_position_increment(2)
//!     .with_token_type(TokenType::Alphanum);
//!
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token type classification by script.
///
/// Segmenters tag every raw term with a type. The filter pipeline only cares
/// whether a term is English-like (see [`TokenType::is_english_like`]), which
/// decides if the stemmer runs on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK (Chinese, Japanese, Korean) ideographs
    Cjk,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    #[default]
    Other,
}

impl TokenType {
    /// Classify a word by the characters it contains.
    ///
    /// - All numeric → Num
    /// - All Hiragana → Hiragana
    /// - All Katakana → Katakana
    /// - Contains Hangul → Hangul
    /// - Contains CJK → Cjk
    /// - ASCII letters and digits (with `-`, `_`, `'`) → Alphanum
    /// - All punctuation → Punctuation
    /// - Otherwise → Other
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
                '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
                '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
                '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
                '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
            )
        }) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '\''))
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }

    /// Whether terms of this type are candidates for English stemming.
    pub fn is_english_like(self) -> bool {
        self == TokenType::Alphanum
    }
}

/// An unfiltered candidate term produced by a segmenter.
///
/// The caller owns the value once the segmenter hands it over; segmenters
/// keep no reference to terms they have returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTerm {
    /// Surface text exactly as it appears in the input
    pub text: String,

    /// Script/language classification
    pub token_type: TokenType,

    /// Byte offset of the first byte of `text` in the input
    pub start_offset: usize,
}

impl RawTerm {
    /// Create a raw term.
    pub fn new<S: Into<String>>(text: S, token_type: TokenType, start_offset: usize) -> Self {
        RawTerm {
            text: text.into(),
            token_type,
            start_offset,
        }
    }

    /// Create a raw term, classifying it with [`TokenType::detect`].
    pub fn detected<S: Into<String>>(text: S, start_offset: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        RawTerm {
            text,
            token_type,
            start_offset,
        }
    }

    /// Byte offset one past the end of the surface text.
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.text.len()
    }
}

/// A token accepted by the filter pipeline.
///
/// Offsets always describe the span of the *original* surface text in the
/// input, even when stemming has shortened `text`. Highlighters can slice
/// the source with `start_offset..end_offset` without knowing whether the
/// token was normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text, stemmed when stemming applied
    pub text: String,

    /// Absolute position in the stream (0-based), counting rejected terms
    pub position: usize,

    /// The byte offset where the original surface text starts
    pub start_offset: usize,

    /// The byte offset where the original surface text ends
    pub end_offset: usize,

    /// Number of raw terms consumed since the previous accepted token,
    /// this one included (always >= 1 for tokens built by the pipeline).
    pub position_increment: usize,

    /// Script classification inherited from the raw term
    pub token_type: TokenType,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            token_type: TokenType::Other,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Clone this token with updated text, keeping offsets and positions.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
