//! Synchronous loading strategy
//!
//! Opens each input file in turn and streams it through the line readers;
//! no file is held in memory as a whole.

use crate::core::RecordStore;
use crate::io::record_reader::open_file;
use crate::strategy::{DataFiles, LoadStrategy};
use crate::types::RecordError;

/// Synchronous, single-threaded loading strategy
///
/// # Examples
///
/// ```no_run
/// use gig_records::strategy::{DataFiles, LoadStrategy, SyncLoadStrategy};
///
/// let files = DataFiles::new("bands.txt", "musicians.txt", "venues.txt");
/// let store = SyncLoadStrategy.load(&files).expect("Loading failed");
/// println!("{} venues", store.venue_count());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncLoadStrategy;

impl LoadStrategy for SyncLoadStrategy {
    /// Open all three files up front, then parse them in order
    ///
    /// Opening first means a missing venues file is reported before any
    /// parsing work is done.
    fn load(&self, files: &DataFiles) -> Result<RecordStore, RecordError> {
        let bands = open_file(&files.bands)?;
        let musicians = open_file(&files.musicians)?;
        let venues = open_file(&files.venues)?;

        RecordStore::load(bands, musicians, venues)
    }
}
