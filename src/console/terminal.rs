//! Terminal console on stdin/stdout

use super::{Console, trim_line_ending};
use clap::ValueEnum;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::process::Command;
use tracing::warn;

/// How the screen is wiped between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearMode {
    /// ANSI clear-screen sequence
    Unix,
    /// The `cls` shell builtin
    Windows,
}

impl Default for ClearMode {
    fn default() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Console backed by the process's stdin and stdout
pub struct TerminalConsole {
    clear_mode: ClearMode,
}

impl TerminalConsole {
    #[must_use]
    pub const fn new(clear_mode: ClearMode) -> Self {
        Self { clear_mode }
    }
}

/// Run a clear-screen command, reporting whether it worked
///
/// A missing or failing command is logged, not returned, so the game keeps going.
fn run_clear_command(program: &str, args: &[&str]) -> bool {
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(program, %status, "clear command failed");
            false
        }
        Err(err) => {
            warn!(program, %err, "clear command could not be started");
            false
        }
    }
}

fn ansi_clear() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> io::Result<()> {
        match self.clear_mode {
            ClearMode::Unix => ansi_clear(),
            ClearMode::Windows if run_clear_command("cmd", &["/C", "cls"]) => Ok(()),
            // Fall back to the escape sequence
            ClearMode::Windows => ansi_clear(),
        }
    }

    fn render_and_prompt(
        &mut self,
        screen: &str,
        notice: Option<&str>,
        prompt: &str,
    ) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{screen}")?;
        writeln!(stdout)?;
        if let Some(notice) = notice {
            writeln!(stdout, "{}", notice.red())?;
        }
        write!(stdout, "{}: ", prompt.bold())?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(trim_line_ending(&input).to_string())
    }
}
