//! Input validation seam
//!
//! Anything the player types goes through a [`Validator`] before it can change state.

use std::fmt;

/// Turns raw player input into an accepted value or a rejection
///
/// Implementations are pure: a rejection never changes any state, so the caller can
/// simply show the message and ask again.
pub trait Validator {
    /// Value produced for accepted input
    type Output;
    /// Reason for refusing the input; its `Display` text is shown to the player
    type Rejection: fmt::Display;

    /// Check `raw` against every rule, in order, stopping at the first failure
    ///
    /// # Errors
    /// Returns the rejection of the first rule that `raw` does not satisfy.
    fn validate(&self, raw: &str) -> Result<Self::Output, Self::Rejection>;
}
