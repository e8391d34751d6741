//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Input is ASCII-lowercased first. Words containing non-ASCII characters
//! are returned unchanged; the rules are only defined over English letters.
//!
//! # Examples
//!
//! ```
//! use segstream::analysis::stemmer::Stemmer;
//! use segstream::analysis::stemmer::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! assert_eq!(stemmer.stem("naïve"), "naïve");
//! ```

use crate::analysis::stemmer::Stemmer;

/// Porter stemming algorithm implementation.
///
/// This is a simplified version of the Porter stemming algorithm
/// for reducing English words to their stems.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

/// Classify every byte of `word` as vowel (`true`) or consonant.
///
/// `y` is a vowel when it follows a consonant, so the table is filled in a
/// single forward pass.
fn vowel_mask(word: &[u8]) -> Vec<bool> {
    let mut mask: Vec<bool> = Vec::with_capacity(word.len());
    for (i, byte) in word.iter().enumerate() {
        let vowel = match byte {
            b'a' | b'e' | b'i' | b'o' | b'u' => true,
            b'y' => i > 0 && !mask[i - 1],
            _ => false,
        };
        mask.push(vowel);
    }
    mask
}

/// Calculate the measure of a word (number of VC patterns).
fn measure(word: &str) -> usize {
    let mask = vowel_mask(word.as_bytes());
    let n = mask.len();
    let mut m = 0;
    let mut i = 0;

    // Skip initial consonants
    while i < n && !mask[i] {
        i += 1;
    }

    while i < n {
        while i < n && mask[i] {
            i += 1;
        }

        if i >= n {
            break;
        }

        m += 1;

        while i < n && !mask[i] {
            i += 1;
        }
    }

    m
}

fn contains_vowel(word: &str) -> bool {
    vowel_mask(word.as_bytes()).contains(&true)
}

fn ends_with_double_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let len = bytes.len();
    len >= 2 && bytes[len - 1] == bytes[len - 2] && !vowel_mask(bytes)[len - 1]
}

/// Check if word ends with consonant-vowel-consonant, the last not w, x or y.
fn ends_cvc(word: &str) -> bool {
    let bytes = word.as_bytes();
    let len = bytes.len();
    if len < 3 {
        return false;
    }

    let mask = vowel_mask(bytes);
    !mask[len - 3]
        && mask[len - 2]
        && !mask[len - 1]
        && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
}

/// Replace `old_suffix` when the remaining stem has at least `min_measure`.
fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
    if let Some(stem) = word.strip_suffix(old_suffix)
        && measure(stem) >= min_measure
    {
        return format!("{stem}{new_suffix}");
    }
    word.to_string()
}

fn step1a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        format!("{stem}ss")
    } else if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}i")
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('s')
        && !stem.is_empty()
    {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn step1b(word: &str) -> String {
    let stemmed = if word.ends_with("eed") {
        replace_suffix(word, "eed", "ee", 1)
    } else if let Some(stem) = word.strip_suffix("ed").or_else(|| word.strip_suffix("ing")) {
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if stemmed == word {
        return stemmed;
    }

    if stemmed.ends_with("at") || stemmed.ends_with("bl") || stemmed.ends_with("iz") {
        format!("{stemmed}e")
    } else if ends_with_double_consonant(&stemmed)
        && !stemmed.ends_with('l')
        && !stemmed.ends_with('s')
        && !stemmed.ends_with('z')
    {
        stemmed[..stemmed.len() - 1].to_string()
    } else if measure(&stemmed) == 1 && ends_cvc(&stemmed) {
        format!("{stemmed}e")
    } else {
        stemmed
    }
}

fn step2(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];

    match SUFFIXES.iter().find(|(old, _)| word.ends_with(old)) {
        Some((old, new)) => replace_suffix(word, old, new, 1),
        None => word.to_string(),
    }
}

fn step3(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];

    match SUFFIXES.iter().find(|(old, _)| word.ends_with(old)) {
        Some((old, new)) => replace_suffix(word, old, new, 1),
        None => word.to_string(),
    }
}

fn step4(word: &str) -> String {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];

    // Only the longest matching suffix is considered; the table lists
    // overlapping suffixes (ement, ment, ent) longest first.
    let Some((stem, suffix)) = SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix).map(|stem| (stem, *suffix)))
    else {
        return word.to_string();
    };

    if measure(stem) > 1 && (suffix != "ion" || stem.ends_with('s') || stem.ends_with('t')) {
        stem.to_string()
    } else {
        word.to_string()
    }
}

fn step5(word: &str) -> String {
    let word = match word.strip_suffix('e') {
        Some(stem) => {
            let m = measure(stem);
            if m > 1 || (m == 1 && !ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        }
        None => word.to_string(),
    };

    if word.ends_with("ll") && measure(&word) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if !word.is_ascii() {
            return word.to_string();
        }

        let word = word.to_ascii_lowercase();
        if word.len() <= 2 {
            return word;
        }

        let word = step1a(&word);
        let word = step1b(&word);
        let word = step2(&word);
        let word = step3(&word);
        let word = step4(&word);
        step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
