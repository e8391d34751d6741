//! Immutable word sets for stop words and exclusions.
//!
//! A [`WordSet`] is a cheaply clonable, read-only set of strings. Filter
//! configurations hold two of them (exclusions and stop words) and share
//! them across every stream built from the same analyzer; nothing ever
//! edits a set in place; a new set replaces the old one instead.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::word_set::{WordSet, DEFAULT_ENGLISH_STOP_WORDS_SET};
//!
//! let custom = WordSet::from_words(["foo", "bar"]);
//! assert!(custom.contains("foo"));
//!
//! let merged = DEFAULT_ENGLISH_STOP_WORDS_SET.union(&custom);
//! assert!(merged.contains("the"));
//! assert!(merged.contains("bar"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a word set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<WordSet> =
    LazyLock::new(|| WordSet::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied()));

/// A shared, immutable set of words compared by exact string equality.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: Arc<AHashSet<String>>,
}

impl WordSet {
    /// Create an empty word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSet {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Read a word list: one word per line, surrounding whitespace trimmed,
    /// blank lines and lines starting with `#` ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = AHashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_string());
        }

        Ok(WordSet {
            words: Arc::new(words),
        })
    }

    /// Read a word list file in the format accepted by [`WordSet::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let set = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} words from {}",
            set.len(),
            path.as_ref().display()
        );
        Ok(set)
    }

    /// Check if a word is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A new set holding the words of both sets.
    pub fn union(&self, other: &WordSet) -> WordSet {
        WordSet {
            words: Arc::new(self.words.union(&other.words).cloned().collect()),
        }
    }

    /// Iterate over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSet::from_words(iter)
    }
}
