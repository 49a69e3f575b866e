//! Revealed-letter mask
//!
//! A mask has one slot per letter of the hidden word. Each slot is either still hidden
//! (shown as `_`) or holds the letter at that position. Slots only ever go from hidden to
//! revealed.

use super::Word;
use std::fmt;

/// Character shown for a slot that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Which positions of the hidden word the player has uncovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    slots: Vec<Option<u8>>,
}

impl RevealMask {
    /// Create a fully hidden mask for `word`
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            slots: vec![None; word.len()],
        }
    }

    /// Number of slots, equal to the word length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter at `position`, or `None` while it is hidden
    ///
    /// # Panics
    /// Panics if `position` is out of range
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots[position]
    }

    /// True once no hidden slot remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of hidden slots
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Reveal every occurrence of `letter` in `word`
    ///
    /// Returns how many slots went from hidden to revealed.
    pub(crate) fn reveal_letter(&mut self, word: &Word, letter: u8) -> usize {
        let mut newly_revealed = 0;
        for &i in word.positions_of(letter) {
            if self.slots[i].is_none() {
                newly_revealed += 1;
            }
            self.slots[i] = Some(letter);
        }
        newly_revealed
    }

    /// Reveal the whole word, regardless of what was already shown
    pub(crate) fn reveal_all(&mut self, word: &Word) {
        self.slots = word.chars().iter().copied().map(Some).collect();
    }

    /// Slots as display characters, hidden slots as [`PLACEHOLDER`]
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, char::from))
    }
}

/// Slots joined by single spaces, e.g. `s _ s`
impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
