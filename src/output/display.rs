//! Screens shown to the player
//!
//! Every string here is part of the visible interface and must stay byte-for-byte stable.

use super::formatters::{Justify, label};
use crate::core::{Game, Outcome};

/// Banner above the main and continue menus
pub const TITLE: &str = r#"================================================================================

||     ||  ||=\\       ||\    ||    //====||   ||\   /||   ||=\\       ||\    ||
||     ||  ||  \\      ||\\   ||   /|          ||\\ //||   ||  \\      ||\\   ||
||=====||  ||===\\     || \\  ||   ||   ====   || \\/ ||   ||===\\     || \\  ||
||     ||  ||    \\    ||  \\ ||   \|     ||   ||     ||   ||    \\    ||  \\ ||
||     ||  ||     \\   ||   \\||    \\====||   ||     ||   ||     \\   ||   \\||

================================================================================"#;

/// Banner above the game board
pub const BOARD_HEADER: &str = r#"----------------------------------
|__|  /\  |\ | /**  |\/|  /\  |\ |
|  | /--\ | \| \__| |  | /--\ | \|
----------------------------------"#;

/// Border line of the mask and guess boxes
const BOX_BORDER: &str = "o-----------------o";

/// Caption between the mask box and the guess box
const GUESSES_CAPTION: &str = "[ Already Guessed ]";

/// Board for a game in progress: the hidden word so far and every guess made
#[must_use]
pub fn game_screen(game: &Game) -> String {
    let mask = label(&game.mask().to_string(), Justify::Center);
    let guesses = label(&game.guesses().to_string(), Justify::Left);

    format!(
        "{BOARD_HEADER}\n\n{BOX_BORDER}\n{mask}\n{BOX_BORDER}\n{GUESSES_CAPTION}\n{BOX_BORDER}\n{guesses}\n{BOX_BORDER}"
    )
}

/// Closing line for a finished game, `None` while it is still running
#[must_use]
pub fn ending_message(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Continue => None,
        Outcome::Win { word, .. } => Some(format!("You guessed the word: {word}")),
        Outcome::Loss { word, .. } => Some(format!("You lose. The word was: {word}")),
    }
}

/// Final board followed by the win or loss line
#[must_use]
pub fn gameover_screen(game: &Game, outcome: &Outcome) -> String {
    let screen = game_screen(game);
    match ending_message(outcome) {
        Some(message) => format!("{screen}\n\n{message}"),
        None => screen,
    }
}
