//! I/O module
//!
//! Handles input file parsing and CSV output.
//!
//! # Components
//!
//! - `record_format` - Line layouts of the bands, musicians and venues files
//! - `record_reader` - Synchronous line and record readers with iterator interface
//! - `async_reader` - Concurrent reading of the three input files
//! - `csv_export` - CSV serialization of the band and venue listings

pub mod async_reader;
pub mod csv_export;
pub mod record_format;
pub mod record_reader;

pub use async_reader::{read_inputs, InputContents};
pub use csv_export::{write_bands_csv, write_venues_csv};
pub use record_format::{BandFormat, MusicianEntry, MusicianFormat, RecordFormat, VenueFormat};
pub use record_reader::{open_file, LineReader, RecordReader};
