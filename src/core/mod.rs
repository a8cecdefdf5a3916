//! Core module
//!
//! This module contains the record containers and query logic:
//! - `ordered_list` - Append-only venue list with a single shared cursor
//! - `traits` - Cursor protocol and the traversal helpers built on it
//! - `record_store` - Bands, musicians and venues loaded for a session

pub mod ordered_list;
pub mod record_store;
pub mod traits;

pub use ordered_list::{Iter, OrderedRecordList, VenueList};
pub use record_store::RecordStore;
pub use traits::RecordCursor;
