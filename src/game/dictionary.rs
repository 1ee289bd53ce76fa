//! Dictionary of playable words
//!
//! Embeds the default wordlist at build time and exposes O(1) set
//! lookup. A custom list can be loaded from any line-oriented file,
//! one word per line.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Embedded wordlist: lowercase, alphabetic only, one per line.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_lines(WORDS_DATA));

/// An immutable set of valid lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse a line-oriented wordlist. Lines are trimmed and
    /// lower-cased; blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Load a wordlist from a file.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::from_lines(&fs::read_to_string(path)?))
    }

    /// The wordlist compiled into the binary.
    pub fn embedded() -> &'static Dictionary {
        &EMBEDDED
    }

    /// Membership test. Words are stored lowercase; callers look up
    /// lower-cased input.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let words = iter.into_iter().map(|w| w.into().to_lowercase()).collect();
        Self { words }
    }
}
