//! Console input/output
//!
//! The session never talks to the terminal directly. It goes through a [`Console`], so
//! a real terminal and a scripted console for tests are interchangeable.

mod scripted;
mod terminal;

pub use scripted::{Frame, ScriptedConsole};
pub use terminal::{ClearMode, TerminalConsole};

use crate::core::Validator;
use std::io;
use tracing::debug;

/// Everything the session needs from the terminal
pub trait Console {
    /// Wipe the screen
    ///
    /// # Errors
    /// Returns any error from the underlying terminal.
    fn clear(&mut self) -> io::Result<()>;

    /// Show `screen`, then `notice` if there is one, then read one line after `prompt`
    ///
    /// The returned line has its line terminator removed and is otherwise untouched.
    ///
    /// # Errors
    /// Returns any error from the underlying terminal, including end of input.
    fn render_and_prompt(
        &mut self,
        screen: &str,
        notice: Option<&str>,
        prompt: &str,
    ) -> io::Result<String>;

    /// Ask until `validator` accepts the input
    ///
    /// Each attempt clears the console and redraws `screen`; after a rejection its
    /// message is shown as the notice.
    ///
    /// # Errors
    /// Returns any error from [`Console::clear`] or [`Console::render_and_prompt`].
    fn ask_with_validation<V: Validator>(
        &mut self,
        screen: &str,
        prompt: &str,
        validator: &V,
    ) -> io::Result<V::Output> {
        let mut notice: Option<String> = None;
        loop {
            self.clear()?;
            let raw = self.render_and_prompt(screen, notice.as_deref(), prompt)?;
            match validator.validate(&raw) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(input = %raw, %rejection, "input rejected");
                    notice = Some(rejection.to_string());
                }
            }
        }
    }
}

/// Strip a trailing `\n` or `\r\n`
pub(crate) fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}
