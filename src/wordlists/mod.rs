//! Word lists for hangman
//!
//! Provides the embedded word list compiled into the binary, file loading, and the
//! sources a session draws hidden words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordBank, WordSequence, WordSource};
