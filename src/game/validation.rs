//! Word validation against the hand and dictionary

use super::dictionary::Dictionary;
use super::{Hand, VOWELS, WILDCARD};
use std::collections::BTreeMap;

/// Result of validating a submitted word, with the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is playable.
    Valid,
    /// Word is not in the dictionary.
    NotInDictionary,
    /// Word is in the dictionary but needs letters the hand lacks.
    MissingLetters { missing: Vec<char> },
    /// No vowel in place of the wildcard forms a dictionary word.
    NoVowelMatch,
}

impl ValidationResult {
    /// Returns true if the word is playable.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Short reason string, used in debug logs.
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "valid word".to_string(),
            ValidationResult::NotInDictionary => "not in dictionary".to_string(),
            ValidationResult::MissingLetters { missing } => {
                format!("missing letters: {}", missing.iter().collect::<String>())
            }
            ValidationResult::NoVowelMatch => "no vowel completes the wildcard".to_string(),
        }
    }
}

/// Validate `word` against the hand and dictionary. Neither input is
/// modified.
///
/// A word without the wildcard must be in the dictionary, and each of
/// its letters must appear in the hand at least as many times as in
/// the word (every letter checked independently against the hand's
/// count for it). A word carrying the wildcard is resolved against the
/// dictionary alone: it is playable when it is not itself a dictionary
/// word and some vowel written in for the wildcard forms one. Hand
/// availability is deliberately not checked on the wildcard path.
pub fn validate(word: &str, hand: &Hand, dictionary: &Dictionary) -> ValidationResult {
    let w = word.to_lowercase();
    if w.contains(WILDCARD) {
        let resolves = !dictionary.contains(&w)
            && VOWELS
                .iter()
                .any(|&v| dictionary.contains(&w.replace(WILDCARD, &v.to_string())));
        if resolves {
            ValidationResult::Valid
        } else {
            ValidationResult::NoVowelMatch
        }
    } else if !dictionary.contains(&w) {
        ValidationResult::NotInDictionary
    } else {
        let mut needed: BTreeMap<char, u32> = BTreeMap::new();
        for c in w.chars() {
            *needed.entry(c).or_insert(0) += 1;
        }
        let missing: Vec<char> = needed
            .iter()
            .filter(|&(&c, &n)| hand.count(c) < n)
            .map(|(&c, _)| c)
            .collect();
        if missing.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::MissingLetters { missing }
        }
    }
}
