//! CSV export of the band and venue listings
//!
//! Used by the non-interactive `--export` mode. Positions are 1-based and
//! match the numbers shown in the interactive menu.

use crate::core::VenueList;
use crate::types::{Band, RecordError};
use serde::Serialize;
use std::io::Write;

/// One exported venue row
#[derive(Debug, Serialize, PartialEq)]
pub struct VenueRow<'a> {
    pub position: usize,
    pub name: &'a str,
    pub capacity: u32,
}

/// One exported band row; `members` counts filled member slots
#[derive(Debug, Serialize, PartialEq)]
pub struct BandRow<'a> {
    pub position: usize,
    pub name: &'a str,
    pub fame: u32,
    pub members: usize,
}

/// Write venues in list order with columns: position, name, capacity
///
/// Walks the list with its borrowing iterator, so the shared cursor is left
/// untouched.
pub fn write_venues_csv(venues: &VenueList, output: &mut dyn Write) -> Result<(), RecordError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["position", "name", "capacity"])?;

    for (index, venue) in venues.iter()?.enumerate() {
        writer.serialize(VenueRow {
            position: index + 1,
            name: venue.name.as_str(),
            capacity: venue.capacity,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Write bands in file order with columns: position, name, fame, members
pub fn write_bands_csv(bands: &[Band], output: &mut dyn Write) -> Result<(), RecordError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["position", "name", "fame", "members"])?;

    for (index, band) in bands.iter().enumerate() {
        writer.serialize(BandRow {
            position: index + 1,
            name: band.name.as_str(),
            fame: band.fame,
            members: band.members.len(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
