//! Line-oriented record readers with an iterator interface
//!
//! [`LineReader`] turns any `BufRead` into a stream of non-blank, numbered
//! lines. [`RecordReader`] groups those lines according to a
//! [`RecordFormat`] and yields one record per group.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable count header) are returned
//!   from the constructors
//! - Record-level parse errors are yielded as `Err` items; the offending
//!   lines are still consumed, so the following records stay aligned
//! - I/O errors while reading end the iteration after being yielded
//!
//! ```no_run
//! use gig_records::io::record_format::VenueFormat;
//! use gig_records::io::record_reader::{open_file, LineReader, RecordReader};
//! use std::path::Path;
//!
//! let file = open_file(Path::new("venues.txt")).unwrap();
//! let reader = RecordReader::<_, VenueFormat>::new(LineReader::new(file)).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(venue) => println!("{} ({})", venue.name, venue.capacity),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::record_format::{parse_count, Line, RecordFormat};
use crate::types::RecordError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;
use tracing::warn;

/// Open an input file for buffered reading
///
/// A missing file is reported as [`RecordError::FileNotFound`]; any other
/// failure as an I/O error naming the path.
pub fn open_file(path: &Path) -> Result<BufReader<File>, RecordError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| open_error(path, e))
}

/// Map a failure to open `path` onto a [`RecordError`]
pub fn open_error(path: &Path, error: io::Error) -> RecordError {
    if error.kind() == io::ErrorKind::NotFound {
        RecordError::file_not_found(path)
    } else {
        RecordError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}

/// Numbered, non-blank lines of a text input
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    lines: io::Lines<R>,
    line_num: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Next line that is not blank, or `None` at end of input
    ///
    /// The line terminator is already removed; other whitespace is kept.
    pub fn next_line(&mut self) -> Result<Option<Line>, RecordError> {
        for line in self.lines.by_ref() {
            self.line_num += 1;
            let text = line?;
            if !text.trim().is_empty() {
                return Ok(Some(Line::new(self.line_num, text)));
            }
        }
        Ok(None)
    }

    /// Number of the last line read (blank lines included)
    pub fn line_number(&self) -> u64 {
        self.line_num
    }
}

/// Iterator over the records of one input file
#[derive(Debug)]
pub struct RecordReader<R: BufRead, F: RecordFormat> {
    lines: LineReader<R>,
    /// Record count from the header, for formats that have one
    declared: Option<usize>,
    read: usize,
    /// Groups that had every line of a record
    complete: usize,
    finished: bool,
    _format: PhantomData<F>,
}

impl<R: BufRead, F: RecordFormat> RecordReader<R, F> {
    /// Prepare a reader, consuming the count header if the format has one
    ///
    /// # Errors
    ///
    /// Returns a parse error if the header is missing or not a number.
    pub fn new(mut lines: LineReader<R>) -> Result<Self, RecordError> {
        let declared = if F::HAS_COUNT {
            let header = lines.next_line()?.ok_or_else(|| RecordError::ParseError {
                file: F::KIND,
                line: None,
                message: "missing record count".to_string(),
            })?;
            Some(parse_count(F::KIND, &header)?)
        } else {
            None
        };

        Ok(Self {
            lines,
            declared,
            read: 0,
            complete: 0,
            finished: false,
            _format: PhantomData,
        })
    }

    /// Count announced by the header, if the format has one
    pub fn declared(&self) -> Option<usize> {
        self.declared
    }

    /// Declared records the file did not contain in full
    ///
    /// Only meaningful once iteration has ended. A trailing partial record
    /// counts as missing.
    pub fn shortfall(&self) -> Option<usize> {
        self.declared
            .map(|declared| declared.saturating_sub(self.complete))
            .filter(|&missing| missing > 0)
    }

    fn finish(&mut self) {
        self.finished = true;
        if let (Some(declared), Some(_)) = (self.declared, self.shortfall()) {
            warn!(
                file = %F::KIND,
                declared,
                found = self.complete,
                "file ends before the declared number of records"
            );
        }
    }
}

impl<R: BufRead, F: RecordFormat> Iterator for RecordReader<R, F> {
    type Item = Result<F::Record, RecordError>;

    /// Read the next group of lines and convert it
    ///
    /// # Returns
    ///
    /// * `Some(Ok(record))` - Successfully parsed record
    /// * `Some(Err(e))` - Parse error (lines consumed) or I/O error
    /// * `None` - Declared count reached or end of file
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.declared.is_some_and(|declared| self.read >= declared) {
            self.finished = true;
            return None;
        }

        let mut group = Vec::with_capacity(F::LINES_PER_RECORD);
        while group.len() < F::LINES_PER_RECORD {
            match self.lines.next_line() {
                Ok(Some(line)) => group.push(line),
                Ok(None) => break,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        if group.is_empty() {
            self.finish();
            return None;
        }

        self.read += 1;

        if group.len() < F::LINES_PER_RECORD {
            self.finish();
            return Some(Err(RecordError::parse(
                F::KIND,
                group[0].number,
                format!(
                    "incomplete record: expected {} lines, found {}",
                    F::LINES_PER_RECORD,
                    group.len()
                ),
            )));
        }

        self.complete += 1;
        Some(F::parse(&group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::record_format::{BandFormat, MusicianFormat, VenueFormat};
    use crate::types::{FileKind, Venue};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary input file for testing
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn venues(content: &str) -> RecordReader<&[u8], VenueFormat> {
        RecordReader::new(LineReader::new(content.as_bytes())).unwrap()
    }

    #[test]
    fn test_line_reader_skips_blank_lines() {
        let mut lines = LineReader::new("first\n\n   \nsecond\r\n".as_bytes());

        assert_eq!(lines.next_line().unwrap(), Some(Line::new(1, "first")));
        assert_eq!(lines.next_line().unwrap(), Some(Line::new(4, "second")));
        assert_eq!(lines.next_line().unwrap(), None);
        assert_eq!(lines.line_number(), 4);
    }

    #[test]
    fn test_open_file_missing() {
        let result = open_file(Path::new("definitely/not/here.txt"));
        assert!(matches!(result, Err(RecordError::FileNotFound { .. })));
    }

    #[test]
    fn test_open_file_reads_venues() {
        let file = create_temp_file("Arena A\n5000\nClub B\n300\n");
        let reader =
            RecordReader::<_, VenueFormat>::new(LineReader::new(open_file(file.path()).unwrap()))
                .unwrap();

        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(
            records,
            vec![Venue::new("Arena A", 5000), Venue::new("Club B", 300)]
        );
    }

    #[test]
    fn test_venues_without_trailing_newline() {
        let records: Vec<_> = venues("Arena A\n5000\nClub B\n300").collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn test_venues_empty_file() {
        assert_eq!(venues("").count(), 0);
        assert_eq!(venues("\n\n").count(), 0);
    }

    #[test]
    fn test_venue_name_without_capacity() {
        let records: Vec<_> = venues("Arena A\n5000\nClub B\n").collect();

        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        let error = records[1].as_ref().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Venues parse error at line 3: incomplete record: expected 2 lines, found 1"
        );
    }

    #[test]
    fn test_bad_record_keeps_following_records_aligned() {
        let records: Vec<_> = venues("Arena A\nmany\nClub B\n300\n").collect();

        assert_eq!(records.len(), 2);
        assert!(records[0].is_err());
        assert_eq!(records[1].as_ref().unwrap(), &Venue::new("Club B", 300));
    }

    #[test]
    fn test_counted_reader_stops_at_declared_count() {
        let content = "1\nThe Cursors\n9000\n2\nLeftover\n1\n1\n";
        let reader =
            RecordReader::<_, BandFormat>::new(LineReader::new(content.as_bytes())).unwrap();

        assert_eq!(reader.declared(), Some(1));
        let bands: Vec<_> = reader.collect();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].as_ref().unwrap().name.as_str(), "The Cursors");
    }

    #[test]
    fn test_counted_reader_short_file() {
        let content = "3\nAna\nThe Cursors\n31\n";
        let reader =
            RecordReader::<_, MusicianFormat>::new(LineReader::new(content.as_bytes())).unwrap();

        let mut reader = reader;
        let musicians: Vec<_> = reader.by_ref().collect();
        assert_eq!(musicians.len(), 1);
        assert!(musicians[0].is_ok());
        assert_eq!(reader.shortfall(), Some(2));
    }

    #[test]
    fn test_counted_reader_ends_in_partial_record() {
        let content = "2\nAna\nThe Cursors\n31\nBo\nNull Pointers\n";
        let mut reader =
            RecordReader::<_, MusicianFormat>::new(LineReader::new(content.as_bytes())).unwrap();

        let musicians: Vec<_> = reader.by_ref().collect();
        assert_eq!(musicians.len(), 2);
        assert!(musicians[0].is_ok());
        assert!(matches!(
            musicians[1],
            Err(RecordError::ParseError { line: Some(5), .. })
        ));
        assert_eq!(reader.shortfall(), Some(1));
    }

    #[test]
    fn test_counted_reader_complete_file_has_no_shortfall() {
        let content = "1\nThe Cursors\n9000\n2\n";
        let mut reader =
            RecordReader::<_, BandFormat>::new(LineReader::new(content.as_bytes())).unwrap();

        assert_eq!(reader.by_ref().count(), 1);
        assert_eq!(reader.shortfall(), None);
    }

    #[test]
    fn test_counted_reader_missing_header() {
        let result = RecordReader::<_, BandFormat>::new(LineReader::new("".as_bytes()));
        assert_eq!(
            result.unwrap_err(),
            RecordError::ParseError {
                file: FileKind::Bands,
                line: None,
                message: "missing record count".to_string(),
            }
        );
    }

    #[test]
    fn test_counted_reader_bad_header() {
        let result = RecordReader::<_, BandFormat>::new(LineReader::new("two\n".as_bytes()));
        assert!(matches!(
            result,
            Err(RecordError::ParseError { line: Some(1), .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = b"Arena A\n\xff\xfe\n";
        let reader = RecordReader::<_, VenueFormat>::new(LineReader::new(bytes)).unwrap();

        let records: Vec<_> = reader.collect();
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], Err(RecordError::IoError { .. })));
    }
}
