//! A single game of hangman
//!
//! The game owns the hidden word and everything the player has learned about it so far.
//! Guesses must come from a [`GuessValidator`](super::GuessValidator); the game itself
//! does not re-check them.

use super::{Guess, GuessLog, GuessValidator, Outcome, RevealMask, Word};
use tracing::debug;

/// Strike limit for any word with no more than six distinct letters
pub const DEFAULT_STRIKE_LIMIT: usize = 6;

/// Upper bound on the strike limit, one per letter of the alphabet
pub const MAX_STRIKE_LIMIT: usize = 26;

/// Strike limit for `word`
///
/// At least [`DEFAULT_STRIKE_LIMIT`], at least the number of distinct letters, and never
/// more than [`MAX_STRIKE_LIMIT`]. Every valid word has at most six distinct letters, so
/// this is currently always six.
#[must_use]
pub fn strike_limit(word: &Word) -> usize {
    DEFAULT_STRIKE_LIMIT
        .max(word.unique_letters())
        .min(MAX_STRIKE_LIMIT)
}

/// What applying one guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessEffect {
    /// The whole word was guessed
    Solved,
    /// The letter is in the word; `count` slots were newly revealed
    Revealed { count: usize },
    /// Nothing matched
    Strike,
}

/// State of one game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: Word,
    mask: RevealMask,
    guesses: GuessLog,
    strikes: usize,
    strike_limit: usize,
}

impl Game {
    /// Start a game for `word` with nothing revealed
    #[must_use]
    pub fn new(word: Word) -> Self {
        let strike_limit = strike_limit(&word);
        Self {
            mask: RevealMask::hidden(&word),
            guesses: GuessLog::new(),
            strikes: 0,
            strike_limit,
            word,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &RevealMask {
        &self.mask
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &GuessLog {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn strikes(&self) -> usize {
        self.strikes
    }

    #[inline]
    #[must_use]
    pub const fn strike_limit(&self) -> usize {
        self.strike_limit
    }

    /// Validator for the next guess in this game
    #[must_use]
    pub fn validator(&self) -> GuessValidator<'_> {
        GuessValidator::new(self.mask.len(), &self.guesses)
    }

    /// Apply a validated guess to the mask or the strike count
    ///
    /// Does not touch the guess log; see [`Game::submit`].
    pub fn apply(&mut self, guess: &Guess) -> GuessEffect {
        if guess.as_str() == self.word.text() {
            self.mask.reveal_all(&self.word);
            return GuessEffect::Solved;
        }

        if let Some(letter) = guess.letter()
            && self.word.has_letter(letter)
        {
            let count = self.mask.reveal_letter(&self.word, letter);
            return GuessEffect::Revealed { count };
        }

        self.strikes += 1;
        GuessEffect::Strike
    }

    /// Record a validated guess, apply it, and resolve the turn
    pub fn submit(&mut self, guess: Guess) -> Outcome {
        let effect = self.apply(&guess);
        debug!(guess = %guess, ?effect, strikes = self.strikes, "guess applied");
        self.guesses.record(guess);
        self.outcome()
    }

    /// Outcome of the game as it stands
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::resolve(&self.word, &self.mask, self.strikes, self.strike_limit)
    }

    /// Whether the game has been won or lost
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }
}
