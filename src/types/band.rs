//! Band and musician records
//!
//! Bands are read first and declare how many member slots they have;
//! musicians are read afterwards and join the band they name.

use super::name::RecordName;

/// A musician as listed in the musicians file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Musician {
    pub name: RecordName,
    pub age: u32,
}

/// A band with a fixed number of member slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    /// Display name; musicians reference the band by this name
    pub name: RecordName,

    /// Popularity score used in ticket price calculation
    pub fame: u32,

    /// Number of members declared in the bands file
    ///
    /// Musicians beyond this count are not added to the band.
    pub member_slots: usize,

    /// Members in the order they were read
    pub members: Vec<Musician>,
}

impl Band {
    /// Create a band with no members yet
    pub fn new(name: impl Into<RecordName>, fame: u32, member_slots: usize) -> Self {
        Band {
            name: name.into(),
            fame,
            member_slots,
            members: Vec::new(),
        }
    }

    /// Place a musician in the next free slot
    ///
    /// # Returns
    ///
    /// `false` if every slot is already taken and the musician was not added.
    pub fn add_member(&mut self, musician: Musician) -> bool {
        if self.members.len() >= self.member_slots {
            return false;
        }
        self.members.push(musician);
        true
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.member_slots
    }
}
