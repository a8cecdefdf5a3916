//! Gig Records Library
//! # Overview
//!
//! This library loads bands, musicians and venues from plain text files and
//! answers the questions a concert booker asks about them, with both a sync
//! and an async loading strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Band, Musician, Venue, errors)
//! - [`cli`] - CLI arguments parsing, file prompts and the console menu
//! - [`core`] - Record containers and queries:
//!   - [`core::ordered_list`] - Append-only list with a single shared cursor
//!   - [`core::traits`] - Cursor protocol used to walk the list
//!   - [`core::record_store`] - Loaded records and the queries over them
//! - [`io`] - Input file parsing and CSV export
//! - [`strategy`] - Pluggable loading strategies
//!
//! # Venue Traversal
//!
//! Venues live in an [`OrderedRecordList`] and are reached through one
//! cursor shared by every reader:
//!
//! - **reset_cursor**: Move the cursor to the first venue
//! - **current**: Copy of the venue under the cursor
//! - **advance**: Step to the next venue
//! - **is_at_end**: Whether the cursor has run past the last venue
//!
//! Picking venue N rewinds and steps forward N-1 times, so every query
//! leaves the cursor somewhere new.
//!
//! # Ticket Prices
//!
//! The minimum ticket price is the band's fame divided by the venue
//! capacity, rounded to cents.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{OrderedRecordList, RecordCursor, RecordStore, VenueList};
pub use io::{write_bands_csv, write_venues_csv};
pub use types::{Band, ListError, Musician, RecordError, RecordName, Venue};
