//! Concurrent reading of the three input files
//!
//! The async loader fetches bands, musicians and venues at the same time and
//! hands the raw bytes to the ordinary line readers afterwards. Parsing
//! itself stays sequential because musicians can only be placed once every
//! band is known.
//!
//! # Architecture
//!
//! ```text
//! tokio::fs::read(bands)     ─┐
//! tokio::fs::read(musicians) ─┼─ try_join! ─► InputContents ─► RecordStore::load
//! tokio::fs::read(venues)    ─┘
//! ```

use crate::io::record_reader::open_error;
use crate::types::RecordError;
use std::path::Path;
use tracing::debug;

/// Raw contents of the three input files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputContents {
    pub bands: Vec<u8>,
    pub musicians: Vec<u8>,
    pub venues: Vec<u8>,
}

/// Read all three files concurrently
///
/// # Errors
///
/// Fails with the first error among the three reads; a missing file is
/// reported as [`RecordError::FileNotFound`].
pub async fn read_inputs(
    bands: &Path,
    musicians: &Path,
    venues: &Path,
) -> Result<InputContents, RecordError> {
    let (bands, musicians, venues) =
        futures::try_join!(read_file(bands), read_file(musicians), read_file(venues))?;

    Ok(InputContents {
        bands,
        musicians,
        venues,
    })
}

async fn read_file(path: &Path) -> Result<Vec<u8>, RecordError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| open_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "input file read");
    Ok(bytes)
}
