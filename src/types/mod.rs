//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `name`: Bounded display names shared by every record
//! - `venue`: The record stored in the ordered venue list
//! - `band`: Bands and musicians
//! - `error`: Error types for the list and the record store

pub mod band;
pub mod error;
pub mod name;
pub mod venue;

pub use band::{Band, Musician};
pub use error::{FileKind, ListError, RecordError};
pub use name::{RecordName, MAX_NAME_LEN};
pub use venue::Venue;
