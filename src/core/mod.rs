//! Core domain types for hangman
//!
//! This module contains the game itself: the hidden word, what has been revealed,
//! guess validation, and win/loss resolution. Nothing here touches the terminal.

mod game;
mod guess;
mod mask;
mod outcome;
mod validator;
mod word;

pub use game::{DEFAULT_STRIKE_LIMIT, Game, GuessEffect, MAX_STRIKE_LIMIT, strike_limit};
pub use guess::{Guess, GuessLog, GuessRejection, GuessRule, GuessValidator};
pub use mask::{PLACEHOLDER, RevealMask};
pub use outcome::Outcome;
pub use validator::Validator;
pub use word::{MAX_UNIQUE_LETTERS, MIN_LENGTH, MIN_UNIQUE_LETTERS, Word, WordError};
