//! Lowercase filter implementation.
//!
//! Case folding is a presentation concern applied after the filter
//! pipeline: stop words and exclusions have already been checked against
//! the text as segmented (and stemmed), not against its folded form.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::token_filter::Filter;
//! use segstream::analysis::token_filter::lowercase::LowercaseFilter;
//! use segstream::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Tokens are folded lazily, one per pull; offsets, positions and position
/// increments pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            if token.text.is_ascii() {
                token.text.make_ascii_lowercase();
            } else {
                token.text = token.text.to_lowercase();
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
