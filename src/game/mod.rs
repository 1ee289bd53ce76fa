#![allow(dead_code)]
//! Game logic: hands of letters, dealing, scoring, word validation

pub mod dictionary;
pub mod scoring;
pub mod session;
pub mod validation;

use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;

/// Number of letters dealt into a fresh hand.
pub const HAND_SIZE: usize = 7;

/// Wildcard letter. Worth zero points; during validation it may stand
/// in for any vowel.
pub const WILDCARD: char = '*';

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

fn draw<R: Rng>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.random_range(0..alphabet.len())]
}

/// Uniform draw over the full alphabet, vowels and consonants alike.
fn draw_any<R: Rng>(rng: &mut R) -> char {
    let i = rng.random_range(0..VOWELS.len() + CONSONANTS.len());
    if i < VOWELS.len() {
        VOWELS[i]
    } else {
        CONSONANTS[i - VOWELS.len()]
    }
}

/// A hand of letters for one round.
///
/// Letters map to strictly positive counts; a letter that runs out is
/// removed rather than kept at zero, so `len` is simply the number of
/// distinct letters held. Every transformation returns a new hand and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: BTreeMap<char, u32>,
}

impl Hand {
    /// Deal a random hand of `n` letters.
    ///
    /// One third of the hand (rounded up) is set aside for vowels, and
    /// one of those slots always holds the wildcard; the rest are
    /// uniform consonant draws. Draws may repeat, so the hand can hold
    /// fewer than `n` distinct letters. Dealing zero letters yields an
    /// empty hand with no wildcard.
    pub fn deal<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut counts = BTreeMap::new();
        if n == 0 {
            return Self { counts };
        }
        let vowel_slots = n.div_ceil(3);
        for _ in 0..vowel_slots - 1 {
            *counts.entry(draw(&VOWELS, rng)).or_insert(0) += 1;
        }
        counts.insert(WILDCARD, 1);
        for _ in 0..n - vowel_slots {
            *counts.entry(draw(&CONSONANTS, rng)).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct letters held.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the hand has no letters left.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// How many copies of `letter` the hand holds.
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Use up the letters of `word`, returning the remaining hand.
    ///
    /// Each occurrence in the lower-cased word removes one copy of
    /// that letter. Letters the hand does not hold are ignored; counts
    /// never go below zero.
    pub fn consume(&self, word: &str) -> Self {
        let mut counts = self.counts.clone();
        for c in word.to_lowercase().chars() {
            if let Some(n) = counts.get_mut(&c) {
                *n -= 1;
                if *n == 0 {
                    counts.remove(&c);
                }
            }
        }
        Self { counts }
    }

    /// Replace all copies of `letter` with a random letter not already
    /// in the hand. A letter the hand does not hold leaves it
    /// unchanged.
    pub fn substitute<R: Rng>(&self, letter: char, rng: &mut R) -> Self {
        let letter = letter.to_ascii_lowercase();
        let Some(&held) = self.counts.get(&letter) else {
            return self.clone();
        };
        let mut replacement = draw_any(rng);
        while self.counts.contains_key(&replacement) {
            replacement = draw_any(rng);
        }
        let mut counts = self.counts.clone();
        counts.remove(&letter);
        counts.insert(replacement, held);
        Self { counts }
    }
}

impl FromIterator<char> for Hand {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for c in iter {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (&letter, &count) in &self.counts {
            for _ in 0..count {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{letter}")?;
                first = false;
            }
        }
        Ok(())
    }
}
