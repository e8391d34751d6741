//! Regex-based segmenter implementation.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::RawTerm;
use crate::error::Result;

/// A segmenter that yields every non-empty match of a regular expression.
///
/// The compiled pattern is shared between all segmenters stamped out from
/// the same prototype via [`RegexSegmenter::bound_to`].
#[derive(Clone, Debug)]
pub struct RegexSegmenter {
    pattern: Arc<Regex>,
    text: String,
    cursor: usize,
}

impl RegexSegmenter {
    /// Create a new regex segmenter with the default pattern `\w+`.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_pattern(r"\w+", text)
    }

    /// Create a new regex segmenter with a custom pattern.
    pub fn with_pattern(pattern: &str, text: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        Ok(RegexSegmenter {
            pattern: Arc::new(regex),
            text: text.to_string(),
            cursor: 0,
        })
    }

    /// Create a segmenter with the same compiled pattern bound to `text`.
    pub fn bound_to(&self, text: &str) -> Self {
        RegexSegmenter {
            pattern: Arc::clone(&self.pattern),
            text: text.to_string(),
            cursor: 0,
        }
    }

    /// Get the regex pattern used by this segmenter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Segmenter for RegexSegmenter {
    fn next_term(&mut self) -> Option<RawTerm> {
        while self.cursor <= self.text.len() {
            let found = self.pattern.find_at(&self.text, self.cursor)?;

            if found.is_empty() {
                // Step past the empty match to the next char boundary
                let step = self.text[found.end()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.cursor = found.end() + step;
                continue;
            }

            self.cursor = found.end();
            return Some(RawTerm::detected(found.as_str(), found.start()));
        }

        None
    }

    fn rebind(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
