//! Loading strategy module
//!
//! This module defines the Strategy pattern for building a [`RecordStore`]
//! from the three input files. Both strategies parse identically; they differ
//! only in how the files are read, and can be selected at runtime.

use crate::cli::LoaderType;
use crate::core::RecordStore;
use crate::types::RecordError;
use std::path::PathBuf;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncLoadStrategy;
pub use sync::SyncLoadStrategy;

/// Paths of the three input files
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataFiles {
    pub bands: PathBuf,
    pub musicians: PathBuf,
    pub venues: PathBuf,
}

impl DataFiles {
    pub fn new(
        bands: impl Into<PathBuf>,
        musicians: impl Into<PathBuf>,
        venues: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bands: bands.into(),
            musicians: musicians.into(),
            venues: venues.into(),
        }
    }
}

/// Loading strategy trait
///
/// Each strategy reads the bands, musicians and venues files and returns a
/// fully populated store.
pub trait LoadStrategy: Send + Sync {
    /// Load a store from the given files
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file cannot be opened or read
    /// - A count header is missing or malformed
    ///
    /// Individual malformed records are logged and skipped rather than
    /// failing the whole load.
    fn load(&self, files: &DataFiles) -> Result<RecordStore, RecordError>;
}

/// Create a loading strategy for the selected loader
///
/// # Arguments
///
/// * `loader` - Which strategy to build
/// * `worker_threads` - Runtime worker count for the async loader (ignored for sync)
pub fn create_strategy(loader: LoaderType, worker_threads: Option<usize>) -> Box<dyn LoadStrategy> {
    match loader {
        LoaderType::Sync => Box::new(SyncLoadStrategy),
        LoaderType::Async => Box::new(
            worker_threads
                .map(AsyncLoadStrategy::new)
                .unwrap_or_default(),
        ),
    }
}
