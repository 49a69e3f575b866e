//! Terminal output formatting
//!
//! Screen text for the board, game-over summary, and menu boxes.

pub mod display;
pub mod formatters;

pub use display::{TITLE, game_screen, gameover_screen};
