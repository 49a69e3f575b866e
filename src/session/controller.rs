//! Session state machine
//!
//! A session moves between menus and games until the player exits:
//!
//! ```text
//! MainMenu ──new game──▶ InGame ──win/loss──▶ GameOver ──new game──▶ InGame
//!    │                    ▲                      │
//!    exit      ContinueMenu ──continue──┘        exit
//!    ▼                                           ▼
//! Terminated ◀──────────────────────────────────┘
//! ```
//!
//! The session holds at most one game. A new game replaces it; continuing resumes it.

use super::menu::{Menu, MenuAction};
use crate::console::Console;
use crate::core::{Game, Outcome};
use crate::output::{game_screen, gameover_screen};
use crate::wordlists::WordSource;
use std::io;
use tracing::{debug, info};

/// Prompt shown under every menu
pub const MENU_PROMPT: &str = "Choose an option";

/// Prompt shown under the board during a game
pub const GUESS_PROMPT: &str = "Guess a letter or a word";

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    /// Main menu variant offered while an unfinished game is held
    ContinueMenu,
    InGame,
    GameOver(Outcome),
    Terminated,
}

/// Drives menus and games over a console
pub struct SessionController<C, S> {
    console: C,
    words: S,
    current: Option<Game>,
    state: SessionState,
}

impl<C: Console, S: WordSource> SessionController<C, S> {
    /// Start a session at the main menu with no game
    pub const fn new(console: C, words: S) -> Self {
        Self {
            console,
            words,
            current: None,
            state: SessionState::MainMenu,
        }
    }

    /// Start a session holding `game`
    ///
    /// An unfinished game is offered through the continue menu; a finished one is
    /// treated like no game at all.
    pub fn resume(console: C, words: S, game: Game) -> Self {
        let state = if game.is_finished() {
            SessionState::MainMenu
        } else {
            SessionState::ContinueMenu
        };

        Self {
            console,
            words,
            current: Some(game),
            state,
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn current_game(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Run until the player exits, then clear the screen
    ///
    /// # Errors
    /// Returns the first console error, such as input being closed.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != SessionState::Terminated {
            self.step()?;
        }
        self.console.clear()
    }

    /// Perform one transition: a menu choice or a single accepted guess
    ///
    /// Rejected input is re-prompted inside the step and never changes state.
    ///
    /// # Errors
    /// Returns any console error. The state is left as it was.
    pub fn step(&mut self) -> io::Result<()> {
        let next = match self.state.clone() {
            SessionState::MainMenu => self.choose(&Menu::main())?,
            SessionState::ContinueMenu => self.choose(&Menu::resume())?,
            SessionState::InGame => self.play_turn()?,
            SessionState::GameOver(outcome) => {
                let screen = self
                    .current
                    .as_ref()
                    .map_or_else(String::new, |game| gameover_screen(game, &outcome));
                self.choose(&Menu::game_over(&screen))?
            }
            SessionState::Terminated => SessionState::Terminated,
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "session transition");
        }
        self.state = next;
        Ok(())
    }

    fn choose(&mut self, menu: &Menu) -> io::Result<SessionState> {
        let action = self
            .console
            .ask_with_validation(menu.text(), MENU_PROMPT, menu)?;
        debug!(menu = ?menu.kind(), ?action, "menu choice");

        Ok(match action {
            MenuAction::NewGame => self.start_new_game(),
            MenuAction::Continue if self.current.is_some() => SessionState::InGame,
            MenuAction::Continue => self.start_new_game(),
            MenuAction::Exit => SessionState::Terminated,
        })
    }

    fn start_new_game(&mut self) -> SessionState {
        let word = self.words.next_word();
        let game = Game::new(word);
        info!(
            length = game.word().len(),
            strike_limit = game.strike_limit(),
            "new game"
        );
        self.current = Some(game);
        SessionState::InGame
    }

    fn play_turn(&mut self) -> io::Result<SessionState> {
        let Some(game) = self.current.as_mut() else {
            return Ok(self.start_new_game());
        };

        let screen = game_screen(game);
        let guess = self
            .console
            .ask_with_validation(&screen, GUESS_PROMPT, &game.validator())?;

        Ok(match game.submit(guess) {
            Outcome::Continue => SessionState::InGame,
            outcome => {
                info!(
                    won = matches!(outcome, Outcome::Win { .. }),
                    guesses = game.guesses().len(),
                    strikes = game.strikes(),
                    "game over"
                );
                SessionState::GameOver(outcome)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::core::Word;
    use crate::wordlists::WordSequence;
    use crate::wordlists::loader::words_from_slice;

    fn session(
        words: &[&str],
        inputs: &[&str],
    ) -> SessionController<ScriptedConsole, WordSequence> {
        SessionController::new(
            ScriptedConsole::new(inputs.iter().copied()),
            WordSequence::new(words_from_slice(words)).unwrap(),
        )
    }

    #[test]
    fn exit_from_main_menu() {
        let mut session = session(&["sos"], &["2"]);
        session.run().unwrap();
        assert_eq!(session.state(), &SessionState::Terminated);
        assert!(session.current_game().is_none());
        // One clear for the menu prompt, one on the way out
        assert_eq!(session.console().clears(), 2);
        assert_eq!(session.console().remaining(), 0);
    }

    #[test]
    fn new_game_then_win_then_exit() {
        let mut session = session(&["sos"], &["1", "s", "o", "2"]);

        session.step().unwrap();
        assert_eq!(session.state(), &SessionState::InGame);

        session.step().unwrap();
        assert_eq!(session.state(), &SessionState::InGame);

        session.step().unwrap();
        assert!(matches!(
            session.state(),
            SessionState::GameOver(Outcome::Win { .. })
        ));

        session.step().unwrap();
        assert_eq!(session.state(), &SessionState::Terminated);

        let last = session.console().last_frame().unwrap();
        assert!(last.screen.contains("You guessed the word: sos"));
        assert_eq!(last.prompt, MENU_PROMPT);
    }

    #[test]
    fn game_over_new_game_replaces_game() {
        let mut session = session(&["sos", "hangman"], &["1", "sos", "1"]);
        session.step().unwrap();
        session.step().unwrap();
        session.step().unwrap();

        assert_eq!(session.state(), &SessionState::InGame);
        let game = session.current_game().unwrap();
        assert_eq!(game.word().text(), "hangman");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn rejected_guess_does_not_change_game() {
        let mut session = session(&["sos"], &["1", "xy", "s"]);
        session.step().unwrap();
        session.step().unwrap();

        let game = session.current_game().unwrap();
        assert_eq!(game.guesses().to_string(), "s");
        assert_eq!(game.strikes(), 0);

        let frames = session.console().frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(
            frames[2].notice.as_deref(),
            Some("Your guess must be 1 character or as long as the word")
        );
        assert_eq!(frames[1].screen, frames[2].screen);
    }

    #[test]
    fn resume_offers_continue_menu() {
        let mut game = Game::new(Word::new("hangman").unwrap());
        let guess = crate::core::Validator::validate(&game.validator(), "a").unwrap();
        game.submit(guess);

        let mut session = SessionController::resume(
            ScriptedConsole::new(["1"]),
            WordSequence::new(words_from_slice(&["sos"])).unwrap(),
            game.clone(),
        );
        assert_eq!(session.state(), &SessionState::ContinueMenu);

        session.step().unwrap();
        assert_eq!(session.state(), &SessionState::InGame);
        assert_eq!(session.current_game(), Some(&game));
    }

    #[test]
    fn resume_with_finished_game_starts_at_main_menu() {
        let mut game = Game::new(Word::new("sos").unwrap());
        let guess = crate::core::Validator::validate(&game.validator(), "sos").unwrap();
        game.submit(guess);

        let session = SessionController::resume(
            ScriptedConsole::new(Vec::<String>::new()),
            WordSequence::new(words_from_slice(&["sos"])).unwrap(),
            game,
        );
        assert_eq!(session.state(), &SessionState::MainMenu);
    }

    #[test]
    fn closed_input_is_an_error_and_keeps_state() {
        let mut session = session(&["sos"], &["1"]);
        session.step().unwrap();
        let err = session.step().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(session.state(), &SessionState::InGame);
    }
}
