//! Word sources
//!
//! A session asks its [`WordSource`] for a fresh word each time a new game starts.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Supplies the hidden word for each new game
pub trait WordSource {
    /// Pick the word for the next game
    fn next_word(&mut self) -> Word;
}

/// Picks uniformly at random from a fixed list of words
pub struct WordBank {
    words: Vec<Word>,
    rng: StdRng,
}

impl WordBank {
    /// Create a bank seeded from the operating system
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a bank with a reproducible sequence of picks
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Option<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn next_word(&mut self) -> Word {
        // Non-empty by construction
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| self.words[0].clone())
    }
}

/// Hands out words in a fixed order, wrapping around at the end
///
/// Useful for scripted sessions where the hidden word must be known in advance.
pub struct WordSequence {
    words: Vec<Word>,
    next: usize,
}

impl WordSequence {
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, next: 0 })
    }
}

impl WordSource for WordSequence {
    fn next_word(&mut self) -> Word {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn empty_sources_are_refused() {
        assert!(WordBank::new(Vec::new()).is_none());
        assert!(WordSequence::new(Vec::new()).is_none());
    }

    #[test]
    fn bank_picks_from_its_words() {
        let words = words_from_slice(&["hangman", "sos", "abduce"]);
        let mut bank = WordBank::seeded(words.clone(), 7).unwrap();
        for _ in 0..20 {
            assert!(words.contains(&bank.next_word()));
        }
    }

    #[test]
    fn seeded_banks_repeat() {
        let words = words_from_slice(&["hangman", "sos", "abduce", "banana"]);
        let mut first = WordBank::seeded(words.clone(), 42).unwrap();
        let mut second = WordBank::seeded(words, 42).unwrap();
        for _ in 0..10 {
            assert_eq!(first.next_word(), second.next_word());
        }
    }

    #[test]
    fn sequence_wraps_around() {
        let words = words_from_slice(&["sos", "hangman"]);
        let mut sequence = WordSequence::new(words).unwrap();
        let picked: Vec<String> = (0..3)
            .map(|_| sequence.next_word().text().to_string())
            .collect();
        assert_eq!(picked, ["sos", "hangman", "sos"]);
    }
}
