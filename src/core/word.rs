//! Hidden word representation
//!
//! A Word stores the lowercase letters of the hidden word along with letter position
//! indices used to reveal every occurrence of a guessed letter.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest word the game will hide
pub const MIN_LENGTH: usize = 3;

/// Fewest distinct letters a hidden word may contain
pub const MIN_UNIQUE_LETTERS: usize = 2;

/// Most distinct letters a hidden word may contain
pub const MAX_UNIQUE_LETTERS: usize = 6;

/// A hidden word with letter position tracking
///
/// Stores the word as bytes and maintains a map of letter positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least 3 letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAlphabetic,
    #[error("Word must contain between 2 and 6 unique letters, got {0}")]
    UniqueLetters(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below 3
    /// - Contains anything other than ASCII letters
    /// - Has fewer than 2 or more than 6 distinct letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Hangman").unwrap();
    /// assert_eq!(word.text(), "hangman");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("h4ngman").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.chars().count() < MIN_LENGTH {
            return Err(WordError::TooShort(text.chars().count()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        let chars = text.as_bytes().to_vec();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        let unique = char_positions.len();
        if !(MIN_UNIQUE_LETTERS..=MAX_UNIQUE_LETTERS).contains(&unique) {
            return Err(WordError::UniqueLetters(unique));
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a valid word has at least three letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn unique_letters(&self) -> usize {
        self.char_positions.len()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.chars(), b"hangman");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("HANGMAN").unwrap();
        assert_eq!(word.text(), "hangman");

        let word2 = Word::new("HaNgMaN").unwrap();
        assert_eq!(word2.text(), "hangman");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(Word::new("ab"), Err(WordError::TooShort(2)));
        assert_eq!(Word::new(""), Err(WordError::TooShort(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("hangm4n"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("hang man"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("café"), Err(WordError::NonAlphabetic));
    }

    #[test]
    fn word_creation_unique_letter_bounds() {
        // One distinct letter
        assert_eq!(Word::new("aaa"), Err(WordError::UniqueLetters(1)));
        // Seven distinct letters
        assert_eq!(Word::new("glacier"), Err(WordError::UniqueLetters(7)));

        assert_eq!(Word::new("sos").unwrap().unique_letters(), 2);
        assert_eq!(Word::new("abduce").unwrap().unique_letters(), 6);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("hangman").unwrap();
        assert!(word.has_letter(b'h'));
        assert!(word.has_letter(b'n'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("mississippi").unwrap();
        assert_eq!(word.positions_of(b'm'), &[0]);
        assert_eq!(word.positions_of(b'i'), &[1, 4, 7, 10]);
        assert_eq!(word.positions_of(b's'), &[2, 3, 5, 6]);
        assert_eq!(word.positions_of(b'z'), &[]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("sos").unwrap();
        assert_eq!(format!("{word}"), "sos");
    }
}
