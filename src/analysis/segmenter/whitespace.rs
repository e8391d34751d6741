//! Whitespace segmenter implementation.

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::RawTerm;

/// A segmenter that splits text on whitespace.
///
/// Every maximal run of non-whitespace characters is one term, punctuation
/// included.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceSegmenter {
    text: String,
    cursor: usize,
}

impl WhitespaceSegmenter {
    /// Create a new whitespace segmenter bound to `text`.
    pub fn new(text: &str) -> Self {
        WhitespaceSegmenter {
            text: text.to_string(),
            cursor: 0,
        }
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn next_term(&mut self) -> Option<RawTerm> {
        let rest = &self.text[self.cursor..];
        let Some(skip) = rest.find(|c: char| !c.is_whitespace()) else {
            self.cursor = self.text.len();
            return None;
        };

        let start = self.cursor + skip;
        let end = self.text[start..]
            .find(char::is_whitespace)
            .map_or(self.text.len(), |len| start + len);
        self.cursor = end;

        Some(RawTerm::detected(&self.text[start..end], start))
    }

    fn rebind(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
