//! Cursor protocol shared by the record store's traversal helpers
//!
//! The record store never indexes the venue list directly. Every lookup is
//! written against [`RecordCursor`]: rewind, then step forward one record at
//! a time. The provided methods implement the two traversals the store needs
//! (read everything, fetch the Nth record) on top of the four primitives.

use crate::core::ordered_list::OrderedRecordList;
use crate::types::ListError;

/// Sequential, forward-only access through a single shared cursor
pub trait RecordCursor {
    type Record;

    /// Move the cursor to the first record
    fn reset_cursor(&mut self) -> Result<(), ListError>;

    /// Step the cursor to the next record
    fn advance(&mut self) -> Result<(), ListError>;

    /// Whether the cursor is past the last record
    fn is_at_end(&self) -> Result<bool, ListError>;

    /// Copy of the record under the cursor
    fn current(&self) -> Result<Self::Record, ListError>;

    /// Fetch the record at a 1-based position by walking from the start
    ///
    /// Resets the cursor and advances `position - 1` times. The cursor is
    /// left on the returned record.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `position` is 0 or past the last record.
    fn seek(&mut self, position: usize) -> Result<Self::Record, ListError> {
        if position == 0 {
            return Err(ListError::out_of_range("seek"));
        }
        self.reset_cursor()?;
        for _ in 1..position {
            self.advance()?;
        }
        self.current()
    }

    /// Read every record from the start, leaving the cursor at end
    fn drain_from_start(&mut self) -> Result<Vec<Self::Record>, ListError> {
        let mut records = Vec::new();
        self.reset_cursor()?;
        while !self.is_at_end()? {
            records.push(self.current()?);
            self.advance()?;
        }
        Ok(records)
    }
}

impl<R: Clone> RecordCursor for OrderedRecordList<R> {
    type Record = R;

    fn reset_cursor(&mut self) -> Result<(), ListError> {
        OrderedRecordList::reset_cursor(self)
    }

    fn advance(&mut self) -> Result<(), ListError> {
        OrderedRecordList::advance(self)
    }

    fn is_at_end(&self) -> Result<bool, ListError> {
        OrderedRecordList::is_at_end(self)
    }

    fn current(&self) -> Result<R, ListError> {
        OrderedRecordList::current(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ordered_list::VenueList;
    use crate::types::Venue;
    use rstest::rstest;

    fn sample_list() -> VenueList {
        let mut list = VenueList::new();
        list.append(Venue::new("Arena A", 5000)).unwrap();
        list.append(Venue::new("Club B", 300)).unwrap();
        list.append(Venue::new("Stadium C", 40000)).unwrap();
        list
    }

    #[rstest]
    #[case(1, "Arena A", 5000)]
    #[case(2, "Club B", 300)]
    #[case(3, "Stadium C", 40000)]
    fn test_seek_valid_positions(
        #[case] position: usize,
        #[case] name: &str,
        #[case] capacity: u32,
    ) {
        let mut list = sample_list();
        let venue = list.seek(position).unwrap();
        assert_eq!(venue, Venue::new(name, capacity));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one_past_end(4)]
    #[case::far_past_end(50)]
    fn test_seek_invalid_positions(#[case] position: usize) {
        let mut list = sample_list();
        assert!(matches!(
            list.seek(position),
            Err(ListError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_seek_leaves_cursor_on_record() {
        let mut list = sample_list();
        list.seek(2).unwrap();
        list.advance().unwrap();
        assert_eq!(list.current().unwrap().name.as_str(), "Stadium C");
    }

    #[test]
    fn test_drain_from_start_reads_in_order() {
        let mut list = sample_list();
        // a half-finished traversal does not affect the next full one
        list.seek(3).unwrap();

        let names: Vec<_> = list
            .drain_from_start()
            .unwrap()
            .into_iter()
            .map(|v| v.name.to_string())
            .collect();
        assert_eq!(names, ["Arena A", "Club B", "Stadium C"]);
        assert!(list.is_at_end().unwrap());
    }

    #[test]
    fn test_drain_empty_list() {
        let mut list = VenueList::new();
        assert!(list.drain_from_start().unwrap().is_empty());
    }

    #[test]
    fn test_helpers_fail_on_destroyed_list() {
        let mut list = sample_list();
        list.destroy().unwrap();
        assert!(matches!(list.seek(1), Err(ListError::Destroyed { .. })));
        assert!(matches!(
            list.drain_from_start(),
            Err(ListError::Destroyed { .. })
        ));
    }
}
