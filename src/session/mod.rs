//! Menu and game lifecycle
//!
//! The controller binds menu choices to starting, resuming, and ending games.

mod controller;
pub mod menu;

pub use controller::{GUESS_PROMPT, MENU_PROMPT, SessionController, SessionState};
pub use menu::{Menu, MenuAction, MenuKind, MenuRejection};
