//! Unicode word segmenter implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and drops
//! segments without any alphanumeric character (punctuation, whitespace).
//! Han ideographs have no word boundaries between them under UAX #29 rules
//! and therefore come out one character per term.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::segmenter::Segmenter;
//! use segstream::analysis::segmenter::unicode_word::UnicodeWordSegmenter;
//!
//! let mut segmenter = UnicodeWordSegmenter::new("Hello, world!");
//! assert_eq!(segmenter.next_term().unwrap().text, "Hello");
//! assert_eq!(segmenter.next_term().unwrap().text, "world");
//! assert!(segmenter.next_term().is_none());
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::RawTerm;

/// A segmenter that yields words between Unicode word boundaries.
///
/// Terms are produced lazily: each call resumes the boundary scan at the
/// byte where the previous term ended.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordSegmenter {
    text: String,
    cursor: usize,
}

impl UnicodeWordSegmenter {
    /// Create a new Unicode word segmenter bound to `text`.
    pub fn new(text: &str) -> Self {
        UnicodeWordSegmenter {
            text: text.to_string(),
            cursor: 0,
        }
    }
}

impl Segmenter for UnicodeWordSegmenter {
    fn next_term(&mut self) -> Option<RawTerm> {
        let rest = &self.text[self.cursor..];
        for (index, word) in rest.split_word_bound_indices() {
            // Only keep actual words (not whitespace or punctuation)
            if word.chars().any(|c| c.is_alphanumeric()) {
                let start_offset = self.cursor + index;
                let term = RawTerm::detected(word, start_offset);
                self.cursor = start_offset + word.len();
                return Some(term);
            }
        }

        self.cursor = self.text.len();
        None
    }

    fn rebind(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
