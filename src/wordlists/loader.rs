//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list '{0}' contains no usable words")]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Entries may be separated by newlines or spaces. Entries that are not valid hangman
/// words are skipped, and repeated entries are kept only once.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse whitespace-separated words, skipping invalid entries and duplicates
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();

    for entry in content.split_whitespace() {
        match Word::new(entry) {
            Ok(word) if words.contains(&word) => {
                debug!(entry, "skipping duplicate word");
            }
            Ok(word) => words.push(word),
            Err(err) => warn!(entry, %err, "skipping invalid word"),
        }
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
