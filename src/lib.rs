//! Hangman
//!
//! A terminal word-guessing game: a hidden word is drawn at random, and the player
//! guesses letters or the whole word before running out of strikes.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, Outcome, Validator, Word};
//!
//! let mut game = Game::new(Word::new("sos").unwrap());
//!
//! let guess = game.validator().validate("s").unwrap();
//! assert_eq!(game.submit(guess), Outcome::Continue);
//! assert_eq!(game.mask().to_string(), "s _ s");
//!
//! let guess = game.validator().validate("o").unwrap();
//! assert!(matches!(game.submit(guess), Outcome::Win { .. }));
//! ```

// Core domain types
pub mod core;

// Word lists and word sources
pub mod wordlists;

// Screen text
pub mod output;

// Terminal and scripted consoles
pub mod console;

// Menus and the session state machine
pub mod session;

// Log file setup
pub mod logging;
