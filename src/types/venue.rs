//! Venue records
//!
//! A venue is the record type stored in the ordered venue list.

use super::name::RecordName;

/// One venue: a display name and the number of people it holds
///
/// Venues are immutable once appended to the list; reading one back from the
/// list hands out a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Display name (bounded, see [`RecordName`])
    pub name: RecordName,

    /// Audience capacity
    pub capacity: u32,
}

impl Venue {
    pub fn new(name: impl Into<RecordName>, capacity: u32) -> Self {
        Venue {
            name: name.into(),
            capacity,
        }
    }
}
