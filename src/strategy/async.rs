//! Asynchronous loading strategy
//!
//! Reads the three input files concurrently on a tokio runtime, then parses
//! the buffered contents exactly like the synchronous strategy does.
//!
//! # Architecture
//!
//! ```text
//! AsyncLoadStrategy
//!     ├── tokio multi-threaded runtime (worker_threads)
//!     ├── read_inputs (three concurrent tokio::fs reads)
//!     └── RecordStore::load (sequential parsing of the buffered bytes)
//! ```

use crate::core::RecordStore;
use crate::io::async_reader::read_inputs;
use crate::strategy::{DataFiles, LoadStrategy};
use crate::types::RecordError;
use tracing::warn;

/// One worker per input file
const DEFAULT_WORKER_THREADS: usize = 3;

/// Asynchronous loading strategy
#[derive(Debug, Clone)]
pub struct AsyncLoadStrategy {
    /// Number of runtime worker threads
    worker_threads: usize,
}

impl Default for AsyncLoadStrategy {
    fn default() -> Self {
        Self {
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }
}

impl AsyncLoadStrategy {
    /// Create a strategy with a custom worker count
    ///
    /// A count of zero falls back to the default.
    pub fn new(worker_threads: usize) -> Self {
        if worker_threads == 0 {
            warn!(
                "invalid worker_threads (0), using default ({})",
                DEFAULT_WORKER_THREADS
            );
            return Self::default();
        }
        Self { worker_threads }
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }
}

impl LoadStrategy for AsyncLoadStrategy {
    fn load(&self, files: &DataFiles) -> Result<RecordStore, RecordError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.worker_threads)
            .build()
            .map_err(|e| RecordError::runtime(format!("failed to create tokio runtime: {}", e)))?;

        let contents = runtime.block_on(read_inputs(
            &files.bands,
            &files.musicians,
            &files.venues,
        ))?;

        RecordStore::load(
            contents.bands.as_slice(),
            contents.musicians.as_slice(),
            contents.venues.as_slice(),
        )
    }
}
