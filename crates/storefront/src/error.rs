//! Caller-visible error types.
//!
//! The error taxonomy of this core is deliberately small: validation of
//! required form fields is the only condition ever reported to the shell.
//! Storage problems are recovered internally (absent value on read, logged
//! warning on write) and never cross this boundary.

use thiserror::Error;

/// A recoverable validation failure on login, register, or checkout.
///
/// The store state is unchanged when this is returned; the shell displays
/// the missing field names and lets the user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were empty at submission time.
    #[error("required fields missing: {}", .missing.join(", "))]
    MissingFields {
        /// Names of the empty required fields, in form order.
        missing: Vec<&'static str>,
    },
}

/// Check that every named field is non-empty.
///
/// "Non-empty" is literal: whitespace counts as content, matching the
/// submission-time checks this core replaces.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] listing every empty field,
/// in the given order.
pub fn require_non_empty(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { missing })
    }
}
