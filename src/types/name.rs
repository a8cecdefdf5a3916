//! Bounded display names
//!
//! Every name in the input files (bands, musicians, venues) is capped at
//! [`MAX_NAME_LEN`] characters, which together with the line terminator makes
//! the 50-character field of the source format.

use serde::Serialize;
use std::fmt;

/// Maximum number of characters kept in a name
pub const MAX_NAME_LEN: usize = 49;

/// A trimmed, length-bounded name
///
/// The line terminator and surrounding whitespace are removed on
/// construction; anything beyond [`MAX_NAME_LEN`] characters is cut off at a
/// character boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordName(String);

impl RecordName {
    /// Build a name from a raw input line, truncating when needed
    pub fn new(raw: &str) -> Self {
        Self::with_truncation(raw).0
    }

    /// Build a name and report whether it had to be truncated
    pub fn with_truncation(raw: &str) -> (Self, bool) {
        let trimmed = raw.trim();
        match trimmed.char_indices().nth(MAX_NAME_LEN) {
            Some((cut, _)) => (RecordName(trimmed[..cut].trim_end().to_string()), true),
            None => (RecordName(trimmed.to_string()), false),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordName {
    fn from(raw: &str) -> Self {
        RecordName::new(raw)
    }
}
