//! Error types for gig-records
//!
//! Two error families live here:
//!
//! - [`ListError`]: usage-contract violations of the ordered venue list
//!   (reading or advancing past the end, touching a destroyed list) and
//!   allocation failures on append.
//! - [`RecordError`]: everything the record store and the console layer can
//!   report (missing files, I/O failures, malformed input, bad selections).
//!
//! Errors are designed to be descriptive and user-friendly for CLI output.

use thiserror::Error;

/// Contract violations and allocation failures of the ordered list
///
/// None of these come from external input: they are programmer errors that
/// the list reports instead of returning stale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The cursor is past the last node (or the list is empty)
    #[error("cursor out of range in {operation}")]
    OutOfRange {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// The list has been destroyed; no further operation is allowed
    #[error("list already destroyed, cannot {operation}")]
    Destroyed {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Storage for a new node could not be reserved
    #[error("failed to allocate storage for {requested} more node(s)")]
    AllocationFailed {
        /// Number of nodes requested
        requested: usize,
    },
}

impl ListError {
    /// Create an OutOfRange error
    pub fn out_of_range(operation: &'static str) -> Self {
        ListError::OutOfRange { operation }
    }

    /// Create a Destroyed error
    pub fn destroyed(operation: &'static str) -> Self {
        ListError::Destroyed { operation }
    }
}

/// Kind of input file, used to give parse errors some context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Bands,
    Musicians,
    Venues,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FileKind::Bands => "Bands",
            FileKind::Musicians => "Musicians",
            FileKind::Venues => "Venues",
        };
        f.write_str(label)
    }
}

/// Main error type for loading and querying records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents loading from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed input file
    ///
    /// Fatal when it concerns a count header; record-level problems are
    /// logged and skipped by the readers instead.
    #[error("{file} parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Which input file was being read
        file: FileKind,
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A 1-based band or venue position outside the loaded range
    #[error("Invalid {kind} number {position} (valid: 1-{available})")]
    InvalidSelection {
        /// "band" or "venue"
        kind: &'static str,
        /// Position requested by the user
        position: usize,
        /// Number of records loaded
        available: usize,
    },

    /// A venue with zero capacity cannot host a priced concert
    #[error("Venue '{venue}' has zero capacity")]
    ZeroCapacity {
        /// Name of the venue
        venue: String,
    },

    /// The venue list reported a contract violation
    #[error("Venue list error: {0}")]
    List(#[from] ListError),

    /// Command-line options that cannot be used together
    #[error("Usage error: {message}")]
    Usage {
        /// What is wrong with the invocation
        message: String,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for RecordError {
    fn from(error: std::io::Error) -> Self {
        RecordError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RecordError {
    fn from(error: csv::Error) -> Self {
        RecordError::IoError {
            message: format!("CSV output failed: {}", error),
        }
    }
}

impl RecordError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        RecordError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a ParseError tied to a line
    pub fn parse(file: FileKind, line: u64, message: impl Into<String>) -> Self {
        RecordError::ParseError {
            file,
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(kind: &'static str, position: usize, available: usize) -> Self {
        RecordError::InvalidSelection {
            kind,
            position,
            available,
        }
    }

    /// Create a ZeroCapacity error
    pub fn zero_capacity(venue: &str) -> Self {
        RecordError::ZeroCapacity {
            venue: venue.to_string(),
        }
    }

    /// Create a Usage error
    pub fn usage(message: impl Into<String>) -> Self {
        RecordError::Usage {
            message: message.into(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl std::fmt::Display) -> Self {
        RecordError::Runtime {
            message: message.to_string(),
        }
    }
}
