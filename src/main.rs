//! Hangman - CLI
//!
//! Terminal hangman with a menu-driven session.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    console::{ClearMode, TerminalConsole},
    core::Word,
    logging::init_tracing,
    session::SessionController,
    wordlists::{WORDS, WordBank, loader::load_from_file, loader::words_from_slice},
};
use std::path::{Path, PathBuf};

/// Environment variable naming a word file to play with
const WORDS_ENV: &str = "HANGMAN_WORDS";

/// Word file picked up from the working directory when present
const DEFAULT_WORD_FILE: &str = "words.txt";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version
)]
struct Cli {
    /// How to clear the screen: unix (ANSI escape) or windows (cls)
    #[arg(short, long, value_enum)]
    clear: Option<ClearMode>,
}

/// Load the word list
///
/// - `HANGMAN_WORDS` set: that file, which must exist
/// - `words.txt` in the working directory: that file
/// - otherwise: the embedded list
fn load_words() -> Result<Vec<Word>> {
    if let Some(path) = std::env::var_os(WORDS_ENV).map(PathBuf::from) {
        return load_from_file(&path)
            .with_context(|| format!("{WORDS_ENV} points at an unusable word list"));
    }

    let default = Path::new(DEFAULT_WORD_FILE);
    if default.exists() {
        return load_from_file(default).context("Failed to load words.txt");
    }

    Ok(words_from_slice(WORDS))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let words = load_words()?;
    let bank = WordBank::new(words).context("No words available to play with")?;
    tracing::info!(words = bank.len(), "word list ready");

    let console = TerminalConsole::new(cli.clear.unwrap_or_default());
    let mut session = SessionController::new(console, bank);
    session.run().context("Terminal input/output failed")?;

    Ok(())
}
