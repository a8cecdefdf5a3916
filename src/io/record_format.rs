//! Record layouts of the three input files
//!
//! Each input file is a sequence of fixed-size line groups. This module
//! describes those groups and converts them into domain records; reading
//! lines from a file is left to [`record_reader`](super::record_reader).
//!
//! ```text
//! bands.txt          musicians.txt      venues.txt
//! ---------          -------------      ----------
//! <count>            <count>            <name>
//! <name>             <name>             <capacity>
//! <fame>             <band name>        <name>
//! <member slots>     <age>              <capacity>
//! ...                ...                ...
//! ```
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Band, FileKind, Musician, RecordError, RecordName, Venue, MAX_NAME_LEN};
use std::str::FromStr;
use tracing::warn;

/// One non-blank input line with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u64,
    pub text: String,
}

impl Line {
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Line {
            number,
            text: text.into(),
        }
    }
}

/// Layout of one kind of input file
pub trait RecordFormat {
    type Record;

    /// Which file this layout describes, for error messages
    const KIND: FileKind;

    /// Lines that make up one record
    const LINES_PER_RECORD: usize;

    /// Whether the file starts with a record count line
    const HAS_COUNT: bool;

    /// Convert exactly `LINES_PER_RECORD` lines into a record
    fn parse(lines: &[Line]) -> Result<Self::Record, RecordError>;
}

/// A musician together with the name of the band they play in
///
/// The band reference is resolved by the record store once all bands are
/// known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicianEntry {
    pub musician: Musician,
    pub band: RecordName,
}

/// `name / fame / member slots`, preceded by a count line
#[derive(Debug)]
pub struct BandFormat;

/// `name / band name / age`, preceded by a count line
#[derive(Debug)]
pub struct MusicianFormat;

/// `name / capacity`, repeated until end of file
#[derive(Debug)]
pub struct VenueFormat;

impl RecordFormat for BandFormat {
    type Record = Band;
    const KIND: FileKind = FileKind::Bands;
    const LINES_PER_RECORD: usize = 3;
    const HAS_COUNT: bool = true;

    fn parse(lines: &[Line]) -> Result<Band, RecordError> {
        let name = parse_name(Self::KIND, &lines[0]);
        let fame = parse_number(Self::KIND, &lines[1], "fame")?;
        let slots = parse_number(Self::KIND, &lines[2], "member count")?;
        Ok(Band::new(name, fame, slots))
    }
}

impl RecordFormat for MusicianFormat {
    type Record = MusicianEntry;
    const KIND: FileKind = FileKind::Musicians;
    const LINES_PER_RECORD: usize = 3;
    const HAS_COUNT: bool = true;

    fn parse(lines: &[Line]) -> Result<MusicianEntry, RecordError> {
        let name = parse_name(Self::KIND, &lines[0]);
        let band = parse_name(Self::KIND, &lines[1]);
        let age = parse_number(Self::KIND, &lines[2], "age")?;
        Ok(MusicianEntry {
            musician: Musician { name, age },
            band,
        })
    }
}

impl RecordFormat for VenueFormat {
    type Record = Venue;
    const KIND: FileKind = FileKind::Venues;
    const LINES_PER_RECORD: usize = 2;
    const HAS_COUNT: bool = false;

    fn parse(lines: &[Line]) -> Result<Venue, RecordError> {
        let name = parse_name(Self::KIND, &lines[0]);
        let capacity = parse_number(Self::KIND, &lines[1], "capacity")?;
        Ok(Venue { name, capacity })
    }
}

/// Parse the record count that opens the bands and musicians files
pub fn parse_count(kind: FileKind, line: &Line) -> Result<usize, RecordError> {
    parse_number(kind, line, "record count")
}

/// Parse a non-negative integer field
///
/// Surrounding whitespace is ignored. Negative values and anything that is
/// not a plain integer are rejected with a line-tagged parse error.
pub fn parse_number<T: FromStr>(
    kind: FileKind,
    line: &Line,
    field: &str,
) -> Result<T, RecordError> {
    line.text.trim().parse::<T>().map_err(|_| {
        RecordError::parse(
            kind,
            line.number,
            format!("invalid {} '{}'", field, line.text.trim()),
        )
    })
}

/// Build a bounded name, logging a warning when it had to be shortened
pub fn parse_name(kind: FileKind, line: &Line) -> RecordName {
    let (name, truncated) = RecordName::with_truncation(&line.text);
    if truncated {
        warn!(
            file = %kind,
            line = line.number,
            "name longer than {} characters truncated to '{}'",
            MAX_NAME_LEN,
            name
        );
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(raw: &[&str]) -> Vec<Line> {
        raw.iter()
            .enumerate()
            .map(|(i, text)| Line::new(i as u64 + 2, *text))
            .collect()
    }

    #[test]
    fn test_parse_band() {
        let band = BandFormat::parse(&lines(&["The Cursors", "9000", "3"])).unwrap();
        assert_eq!(band.name.as_str(), "The Cursors");
        assert_eq!(band.fame, 9000);
        assert_eq!(band.member_slots, 3);
        assert!(band.members.is_empty());
    }

    #[test]
    fn test_parse_musician() {
        let entry = MusicianFormat::parse(&lines(&["Ana", "The Cursors", " 31 "])).unwrap();
        assert_eq!(entry.musician.name.as_str(), "Ana");
        assert_eq!(entry.musician.age, 31);
        assert_eq!(entry.band.as_str(), "The Cursors");
    }

    #[test]
    fn test_parse_venue() {
        let venue = VenueFormat::parse(&lines(&["Arena A", "5000"])).unwrap();
        assert_eq!(venue, Venue::new("Arena A", 5000));
    }

    #[rstest]
    #[case::not_a_number(&["Arena A", "lots"], "invalid capacity 'lots'")]
    #[case::negative(&["Arena A", "-5"], "invalid capacity '-5'")]
    #[case::empty(&["Arena A", "  "], "invalid capacity ''")]
    #[case::fraction(&["Arena A", "12.5"], "invalid capacity '12.5'")]
    fn test_parse_venue_errors(#[case] raw: &[&str], #[case] expected: &str) {
        let error = VenueFormat::parse(&lines(raw)).unwrap_err();
        assert_eq!(
            error,
            RecordError::parse(FileKind::Venues, 3, expected.to_string())
        );
    }

    #[rstest]
    #[case::bad_fame(&["Band", "famous", "2"], "invalid fame 'famous'")]
    #[case::bad_slots(&["Band", "10", "two"], "invalid member count 'two'")]
    fn test_parse_band_errors(#[case] raw: &[&str], #[case] expected: &str) {
        let error = BandFormat::parse(&lines(raw)).unwrap_err();
        assert!(error.to_string().contains(expected), "{}", error);
    }

    #[rstest]
    #[case("3", 3)]
    #[case(" 12 ", 12)]
    #[case("0", 0)]
    fn test_parse_count(#[case] text: &str, #[case] expected: usize) {
        let count = parse_count(FileKind::Bands, &Line::new(1, text)).unwrap();
        assert_eq!(count, expected);
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        let error = parse_count(FileKind::Musicians, &Line::new(1, "three")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Musicians parse error at line 1: invalid record count 'three'"
        );
    }

    #[test]
    fn test_parse_name_truncates_long_names() {
        let long = "z".repeat(MAX_NAME_LEN + 5);
        let name = parse_name(FileKind::Venues, &Line::new(7, long));
        assert_eq!(name.as_str().len(), MAX_NAME_LEN);
    }
}
