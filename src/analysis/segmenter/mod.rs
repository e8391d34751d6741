//! Segmenter capability and built-in segmentation strategies.
//!
//! A [`Segmenter`] is the leaf of the analysis chain: bound to one input text,
//! it yields raw terms lazily, one per call, until the text is exhausted.
//! The filter pipeline treats it as an opaque generator and only ever calls
//! [`Segmenter::next_term`] and [`Segmenter::rebind`], so any engine with that
//! shape (dictionary based, statistical, rule based) can be plugged in.
//!
//! # Available Segmenters
//!
//! - [`unicode_word::UnicodeWordSegmenter`] - Unicode word boundaries (UAX #29)
//! - [`whitespace::WhitespaceSegmenter`] - Splits on whitespace
//! - [`regex::RegexSegmenter`] - Each regex match is a term
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::segmenter::{Segmenter, SegmenterKind};
//!
//! let mut segmenter = SegmenterKind::Whitespace.build("hello world").unwrap();
//! assert_eq!(segmenter.next_term().unwrap().text, "hello");
//! assert_eq!(segmenter.next_term().unwrap().text, "world");
//! assert!(segmenter.next_term().is_none());
//!
//! segmenter.rebind("again");
//! assert_eq!(segmenter.next_term().unwrap().text, "again");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::RawTerm;
use crate::error::{Result, SegstreamError};

/// A resettable, lazy generator of raw terms over one input text.
pub trait Segmenter: Send {
    /// Produce the next raw term, or `None` once the input is exhausted.
    ///
    /// Start offsets of successive terms must be non-decreasing.
    fn next_term(&mut self) -> Option<RawTerm>;

    /// Discard the cursor and bind to new input, starting from its beginning.
    fn rebind(&mut self, text: &str);

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual segmenter modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;

pub use self::regex::RegexSegmenter;
pub use unicode_word::UnicodeWordSegmenter;
pub use whitespace::WhitespaceSegmenter;

/// Builds a segmenter bound to the given text.
pub type SegmenterFactory = Arc<dyn Fn(&str) -> Box<dyn Segmenter> + Send + Sync>;

/// Selector for a built-in segmentation strategy.
///
/// The textual form is `unicode_word`, `whitespace` or `regex:<pattern>`,
/// which is also how the kind is serialized in configuration files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SegmenterKind {
    /// Unicode word boundaries; CJK ideographs become single-character terms.
    #[default]
    UnicodeWord,
    /// Maximal runs of non-whitespace characters.
    Whitespace,
    /// Every non-empty match of `pattern`.
    Regex {
        /// The regular expression matching one term
        pattern: String,
    },
}

impl SegmenterKind {
    /// Names accepted by [`FromStr`], with a short description each.
    pub const AVAILABLE: &'static [(&'static str, &'static str)] = &[
        ("unicode_word", "Unicode word boundaries (UAX #29), default"),
        ("whitespace", "Runs of non-whitespace characters"),
        ("regex:<pattern>", "Each non-empty match of <pattern>"),
    ];

    /// Validate the strategy and return a factory for segmenters.
    ///
    /// This is where an unusable strategy (an invalid regex pattern) is
    /// reported, so analyzers fail at construction time rather than on the
    /// first pull.
    pub fn factory(&self) -> Result<SegmenterFactory> {
        let factory: SegmenterFactory = match self {
            SegmenterKind::UnicodeWord => {
                Arc::new(|text: &str| Box::new(UnicodeWordSegmenter::new(text)) as Box<dyn Segmenter>)
            }
            SegmenterKind::Whitespace => {
                Arc::new(|text: &str| Box::new(WhitespaceSegmenter::new(text)) as Box<dyn Segmenter>)
            }
            SegmenterKind::Regex { pattern } => {
                let prototype = RegexSegmenter::with_pattern(pattern, "")?;
                Arc::new(move |text: &str| Box::new(prototype.bound_to(text)) as Box<dyn Segmenter>)
            }
        };
        Ok(factory)
    }

    /// Build a segmenter of this kind bound to `text`.
    pub fn build(&self, text: &str) -> Result<Box<dyn Segmenter>> {
        Ok((self.factory()?)(text))
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmenterKind::UnicodeWord => write!(f, "unicode_word"),
            SegmenterKind::Whitespace => write!(f, "whitespace"),
            SegmenterKind::Regex { pattern } => write!(f, "regex:{pattern}"),
        }
    }
}

impl FromStr for SegmenterKind {
    type Err = SegstreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unicode_word" | "unicode" => Ok(SegmenterKind::UnicodeWord),
            "whitespace" => Ok(SegmenterKind::Whitespace),
            _ => match s.strip_prefix("regex:") {
                Some(pattern) if !pattern.is_empty() => Ok(SegmenterKind::Regex {
                    pattern: pattern.to_string(),
                }),
                Some(_) => Err(SegstreamError::analysis(
                    "regex segmenter requires a pattern, e.g. 'regex:\\w+'",
                )),
                None => Err(SegstreamError::analysis(format!(
                    "unknown segmenter '{s}'"
                ))),
            },
        }
    }
}

impl TryFrom<String> for SegmenterKind {
    type Error = SegstreamError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SegmenterKind> for String {
    fn from(kind: SegmenterKind) -> Self {
        kind.to_string()
    }
}
