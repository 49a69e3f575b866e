//! Guess validation and history
//!
//! A raw guess is checked against three ordered rules before the game sees it:
//! 1. length: one letter, or as many letters as the hidden word
//! 2. alphabetic characters only
//! 3. not guessed before in this game
//!
//! The first failing rule decides the rejection message.

use super::validator::Validator;
use std::fmt;
use thiserror::Error;

/// A guess that passed every rule, lowercased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess(String);

impl Guess {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The normalized guess text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The guessed letter, if this is a single-letter guess
    #[must_use]
    pub fn letter(&self) -> Option<u8> {
        match self.0.as_bytes() {
            [letter] => Some(*letter),
            _ => None,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every accepted guess of one game, in the order it was made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLog {
    guesses: Vec<Guess>,
}

impl GuessLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, guess: Guess) {
        self.guesses.push(guess);
    }

    /// Whether `text` (already lowercased) was guessed before
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.guesses.iter().any(|g| g.as_str() == text)
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// True before the first accepted guess
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Guesses in the order they were made
    pub fn iter(&self) -> std::slice::Iter<'_, Guess> {
        self.guesses.iter()
    }
}

impl<'a> IntoIterator for &'a GuessLog {
    type Item = &'a Guess;
    type IntoIter = std::slice::Iter<'a, Guess>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Guesses joined by single spaces
impl fmt::Display for GuessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, guess) in self.guesses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(guess.as_str())?;
        }
        Ok(())
    }
}

/// Why a guess was refused; the message is shown to the player as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Your guess must be 1 character or as long as the word")]
    Length,
    #[error("Your guess must only contain alphabetical characters")]
    NonAlphabetic,
    #[error("You've already guessed that")]
    AlreadyGuessed,
}

/// One structural rule a guess must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRule {
    Length,
    Alphabetic,
    Novelty,
}

impl GuessRule {
    /// Rules in evaluation order
    pub const ORDER: [Self; 3] = [Self::Length, Self::Alphabetic, Self::Novelty];

    /// Check `raw` against this rule
    #[must_use]
    pub fn passes(self, raw: &str, word_len: usize, log: &GuessLog) -> bool {
        match self {
            Self::Length => {
                let len = raw.chars().count();
                len == 1 || len == word_len
            }
            Self::Alphabetic => raw.chars().all(char::is_alphabetic),
            Self::Novelty => !log.contains(&raw.to_lowercase()),
        }
    }

    /// Rejection reported when this rule fails
    #[must_use]
    pub const fn rejection(self) -> GuessRejection {
        match self {
            Self::Length => GuessRejection::Length,
            Self::Alphabetic => GuessRejection::NonAlphabetic,
            Self::Novelty => GuessRejection::AlreadyGuessed,
        }
    }
}

/// Checks raw guesses against the current game
///
/// Borrowed from a game for the duration of one prompt; it never mutates anything.
#[derive(Debug, Clone, Copy)]
pub struct GuessValidator<'a> {
    word_len: usize,
    log: &'a GuessLog,
}

impl<'a> GuessValidator<'a> {
    #[must_use]
    pub const fn new(word_len: usize, log: &'a GuessLog) -> Self {
        Self { word_len, log }
    }
}

impl Validator for GuessValidator<'_> {
    type Output = Guess;
    type Rejection = GuessRejection;

    fn validate(&self, raw: &str) -> Result<Guess, GuessRejection> {
        if let Some(rule) = GuessRule::ORDER
            .into_iter()
            .find(|rule| !rule.passes(raw, self.word_len, self.log))
        {
            return Err(rule.rejection());
        }

        Ok(Guess::new(raw.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(guesses: &[&str]) -> GuessLog {
        let mut log = GuessLog::new();
        for &g in guesses {
            log.record(Guess::new(g));
        }
        log
    }

    #[test]
    fn accepts_single_letter_and_lowercases() {
        let log = GuessLog::new();
        let validator = GuessValidator::new(7, &log);
        assert_eq!(validator.validate("A"), Ok(Guess::new("a")));
    }

    #[test]
    fn accepts_full_length_word() {
        let log = GuessLog::new();
        let validator = GuessValidator::new(7, &log);
        assert_eq!(validator.validate("HangMan").unwrap().as_str(), "hangman");
    }

    #[test]
    fn rejects_wrong_length() {
        let log = GuessLog::new();
        let validator = GuessValidator::new(7, &log);
        assert_eq!(validator.validate("ab"), Err(GuessRejection::Length));
        assert_eq!(validator.validate(""), Err(GuessRejection::Length));
        assert_eq!(validator.validate("abcdefgh"), Err(GuessRejection::Length));
    }

    #[test]
    fn rejects_non_alphabetic() {
        let log = GuessLog::new();
        let validator = GuessValidator::new(2, &log);
        assert_eq!(validator.validate("a1"), Err(GuessRejection::NonAlphabetic));
        assert_eq!(validator.validate("7"), Err(GuessRejection::NonAlphabetic));
        assert_eq!(validator.validate(" "), Err(GuessRejection::NonAlphabetic));
    }

    #[test]
    fn rejects_repeat_case_insensitively() {
        let log = log_of(&["e", "hangman"]);
        let validator = GuessValidator::new(7, &log);
        assert_eq!(validator.validate("e"), Err(GuessRejection::AlreadyGuessed));
        assert_eq!(validator.validate("E"), Err(GuessRejection::AlreadyGuessed));
        assert_eq!(
            validator.validate("HANGMAN"),
            Err(GuessRejection::AlreadyGuessed)
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        // Wrong length and non-alphabetic: length is reported
        let log = log_of(&["a"]);
        let validator = GuessValidator::new(7, &log);
        assert_eq!(validator.validate("a1"), Err(GuessRejection::Length));

        // A single digit passes the length rule and fails the alphabetic one
        let validator = GuessValidator::new(1, &log);
        assert_eq!(validator.validate("1"), Err(GuessRejection::NonAlphabetic));
    }

    #[test]
    fn rule_messages() {
        assert_eq!(
            GuessRejection::Length.to_string(),
            "Your guess must be 1 character or as long as the word"
        );
        assert_eq!(
            GuessRejection::NonAlphabetic.to_string(),
            "Your guess must only contain alphabetical characters"
        );
        assert_eq!(
            GuessRejection::AlreadyGuessed.to_string(),
            "You've already guessed that"
        );
    }

    #[test]
    fn guess_log_display_and_letter() {
        let log = log_of(&["s", "sos", "o"]);
        assert_eq!(log.to_string(), "s sos o");
        assert_eq!(log.len(), 3);
        let letters: Vec<Option<u8>> = (&log).into_iter().map(Guess::letter).collect();
        assert_eq!(letters, [Some(b's'), None, Some(b'o')]);
        assert_eq!(Guess::new("s").letter(), Some(b's'));
        assert_eq!(Guess::new("sos").letter(), None);
    }
}
