//! Pitch text validation.
//!
//! A [`Pitch`] can only be constructed through [`Pitch::new`], so any value of
//! this type is known to hold between [`MIN_PITCH_CHARS`] and
//! [`MAX_PITCH_CHARS`] characters and no NUL. The repository insert takes a `&Pitch`
//! rather than a `&str` for that reason.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Shortest accepted pitch, in characters.
pub const MIN_PITCH_CHARS: usize = 1;

/// Longest accepted pitch, in characters.
pub const MAX_PITCH_CHARS: usize = 500;

/// Validated idea text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pitch(String);

impl Pitch {
    /// Validate `text` and wrap it.
    ///
    /// Length is counted in Unicode scalar values, not bytes. The text is
    /// stored as submitted: it is never trimmed or truncated.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        validate_pitch(&text)?;
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pitch {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check that `text` is a non-empty pitch of at most [`MAX_PITCH_CHARS`]
/// characters with no NUL in it.
///
/// SQLite's `length()` stops at the first NUL, so such text could not be
/// checked by the table constraint.
pub fn validate_pitch(text: &str) -> Result<(), CoreError> {
    if text.contains('\0') {
        return Err(CoreError::Validation(
            "Pitch must not contain NUL characters".to_string(),
        ));
    }
    let len = text.chars().count();
    if len < MIN_PITCH_CHARS {
        return Err(CoreError::Validation("Pitch must not be empty".to_string()));
    }
    if len > MAX_PITCH_CHARS {
        return Err(CoreError::Validation(format!(
            "Pitch must be at most {MAX_PITCH_CHARS} characters, got {len}"
        )));
    }
    Ok(())
}
