//! Menus
//!
//! Each menu is a fixed table of keys, labels, and the action a key selects. A menu is
//! also the [`Validator`] for its own prompt: any key not in the table is refused with
//! the menu's message.

use crate::core::Validator;
use crate::output::TITLE;
use crate::output::formatters::menu_box;
use thiserror::Error;

/// What a menu choice asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a game with a fresh word
    NewGame,
    /// Go back to the game already in progress
    Continue,
    /// Leave the program
    Exit,
}

/// One selectable line of a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub key: &'static str,
    pub name: &'static str,
    pub action: MenuAction,
}

const fn option(key: &'static str, name: &'static str, action: MenuAction) -> MenuOption {
    MenuOption { key, name, action }
}

const MAIN_OPTIONS: &[MenuOption] = &[
    option("1", "new game", MenuAction::NewGame),
    option("2", "exit", MenuAction::Exit),
];

const CONTINUE_OPTIONS: &[MenuOption] = &[
    option("1", "continue", MenuAction::Continue),
    option("2", "new game", MenuAction::NewGame),
    option("3", "exit", MenuAction::Exit),
];

const GAME_OVER_OPTIONS: &[MenuOption] = &[
    option("1", "new game", MenuAction::NewGame),
    option("2", "exit", MenuAction::Exit),
];

/// The menus a session can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Main,
    Continue,
    GameOver,
}

impl MenuKind {
    /// Options in display order
    #[must_use]
    pub const fn options(self) -> &'static [MenuOption] {
        match self {
            Self::Main => MAIN_OPTIONS,
            Self::Continue => CONTINUE_OPTIONS,
            Self::GameOver => GAME_OVER_OPTIONS,
        }
    }

    /// Shown when the player enters a key the menu doesn't list
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Main | Self::GameOver => "Please enter \"1\" or \"2\"",
            Self::Continue => "Please enter \"1\", \"2\", or \"3\"",
        }
    }

    /// Action selected by `key`, if the menu lists it
    #[must_use]
    pub fn action_for(self, key: &str) -> Option<MenuAction> {
        self.options()
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.action)
    }
}

/// A menu key that isn't listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MenuRejection {
    pub message: &'static str,
}

/// A menu ready to render: its header text plus the option box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    kind: MenuKind,
    text: String,
}

impl Menu {
    /// Title banner with new game / exit
    #[must_use]
    pub fn main() -> Self {
        Self::with_header(MenuKind::Main, TITLE)
    }

    /// Title banner with continue / new game / exit
    #[must_use]
    pub fn resume() -> Self {
        Self::with_header(MenuKind::Continue, TITLE)
    }

    /// Final board of a finished game with new game / exit
    #[must_use]
    pub fn game_over(screen: &str) -> Self {
        Self::with_header(MenuKind::GameOver, screen)
    }

    fn with_header(kind: MenuKind, header: &str) -> Self {
        let options: Vec<(&str, &str)> = kind
            .options()
            .iter()
            .map(|option| (option.key, option.name))
            .collect();

        Self {
            kind,
            text: format!("{header}\n\n{}", menu_box(&options)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MenuKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Validator for Menu {
    type Output = MenuAction;
    type Rejection = MenuRejection;

    fn validate(&self, raw: &str) -> Result<MenuAction, MenuRejection> {
        self.kind.action_for(raw).ok_or(MenuRejection {
            message: self.kind.message(),
        })
    }
}
