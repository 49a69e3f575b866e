//! End-of-turn resolution
//!
//! After every applied guess the game is either still running, won, or lost.
//! A fully revealed word always wins, even if the same turn used up the last strike.

use super::{RevealMask, Word};

/// Result of resolving a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Ask for another guess
    Continue,
    /// Every letter is revealed
    Win { word: Word, mask: RevealMask },
    /// The strike limit was reached with letters still hidden
    Loss { word: Word, mask: RevealMask },
}

impl Outcome {
    /// Decide the outcome for the given game state
    #[must_use]
    pub fn resolve(word: &Word, mask: &RevealMask, strikes: usize, strike_limit: usize) -> Self {
        if mask.is_complete() {
            return Self::Win {
                word: word.clone(),
                mask: mask.clone(),
            };
        }

        if strikes >= strike_limit {
            return Self::Loss {
                word: word.clone(),
                mask: mask.clone(),
            };
        }

        Self::Continue
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Continue)
    }

    /// Hidden word of a finished game
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Continue => None,
            Self::Win { word, .. } | Self::Loss { word, .. } => Some(word),
        }
    }
}
