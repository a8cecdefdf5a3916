//! In-memory store of bands, musicians and venues
//!
//! The store is filled once from the three input files and then answers the
//! console queries. Venues are kept in the ordered [`VenueList`] and are only
//! ever reached through its shared cursor (see [`RecordCursor`]): listing
//! walks the whole list, and picking venue N rewinds and steps forward N-1
//! times.
//!
//! # Loading
//!
//! Files are ingested in a fixed order:
//!
//! 1. Bands, each with a number of free member slots
//! 2. Musicians, each placed into every band whose name matches exactly
//! 3. Venues, appended to the list in file order
//!
//! Malformed records are logged and skipped; loading continues with the next
//! record. Only I/O failures and unreadable count headers abort loading.

use crate::core::ordered_list::VenueList;
use crate::core::traits::RecordCursor;
use crate::io::record_format::{BandFormat, MusicianEntry, MusicianFormat, VenueFormat};
use crate::io::record_reader::{LineReader, RecordReader};
use crate::types::{Band, ListError, Musician, RecordError, RecordName, Venue};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Bands, musicians and venues loaded for one session
#[derive(Debug, Default)]
pub struct RecordStore {
    bands: Vec<Band>,
    musicians: Vec<Musician>,
    venues: VenueList,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from the three inputs
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read or a count header is
    /// malformed. Individual malformed records are skipped.
    pub fn load<B, M, V>(bands: B, musicians: M, venues: V) -> Result<Self, RecordError>
    where
        B: BufRead,
        M: BufRead,
        V: BufRead,
    {
        let mut store = Self::new();

        store.ingest_bands(RecordReader::<_, BandFormat>::new(LineReader::new(bands))?)?;
        store.ingest_musicians(RecordReader::<_, MusicianFormat>::new(LineReader::new(
            musicians,
        ))?)?;
        store.ingest_venues(RecordReader::<_, VenueFormat>::new(LineReader::new(venues))?)?;

        info!(
            bands = store.bands.len(),
            musicians = store.musicians.len(),
            venues = store.venues.len(),
            "records loaded"
        );
        Ok(store)
    }

    /// Add bands in file order
    pub fn ingest_bands<I>(&mut self, records: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = Result<Band, RecordError>>,
    {
        for result in records {
            if let Some(band) = skip_malformed(result)? {
                self.bands.push(band);
            }
        }
        Ok(())
    }

    /// Add musicians and place each one into the band they name
    ///
    /// Bands must be ingested first. A musician naming no known band is
    /// kept in the roster without a band; one whose band is already full is
    /// not added to it.
    pub fn ingest_musicians<I>(&mut self, records: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = Result<MusicianEntry, RecordError>>,
    {
        for result in records {
            if let Some(entry) = skip_malformed(result)? {
                self.place_musician(&entry);
                self.musicians.push(entry.musician);
            }
        }
        Ok(())
    }

    /// Append venues to the list in file order
    pub fn ingest_venues<I>(&mut self, records: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = Result<Venue, RecordError>>,
    {
        for result in records {
            if let Some(venue) = skip_malformed(result)? {
                self.venues.append(venue)?;
            }
        }
        Ok(())
    }

    fn place_musician(&mut self, entry: &MusicianEntry) {
        let mut matched = false;

        for band in self.bands.iter_mut().filter(|b| b.name == entry.band) {
            matched = true;
            if band.is_full() {
                warn!(
                    musician = %entry.musician.name,
                    band = %band.name,
                    slots = band.member_slots,
                    "band has no free member slot, musician not added"
                );
            } else {
                band.add_member(entry.musician.clone());
            }
        }

        if !matched {
            warn!(
                musician = %entry.musician.name,
                band = %entry.band,
                "musician references an unknown band"
            );
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn musicians(&self) -> &[Musician] {
        &self.musicians
    }

    /// Read-only access to the venue list (for iteration and export)
    pub fn venues(&self) -> &VenueList {
        &self.venues
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    /// Names of all venues, in list order
    ///
    /// Walks the list with the shared cursor, which ends up at end.
    pub fn venue_names(&mut self) -> Result<Vec<RecordName>, RecordError> {
        let venues = self.venues.drain_from_start()?;
        Ok(venues.into_iter().map(|venue| venue.name).collect())
    }

    /// Band at a 1-based position
    pub fn band_at(&self, position: usize) -> Result<&Band, RecordError> {
        position
            .checked_sub(1)
            .and_then(|index| self.bands.get(index))
            .ok_or_else(|| RecordError::invalid_selection("band", position, self.bands.len()))
    }

    /// Venue at a 1-based position, found by walking the list from its head
    pub fn venue_at(&mut self, position: usize) -> Result<Venue, RecordError> {
        match self.venues.seek(position) {
            Ok(venue) => Ok(venue),
            Err(ListError::OutOfRange { .. }) => Err(RecordError::invalid_selection(
                "venue",
                position,
                self.venues.len(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Members of the band at a 1-based position
    pub fn members_of(&self, band_position: usize) -> Result<&[Musician], RecordError> {
        Ok(&self.band_at(band_position)?.members)
    }

    /// Minimum ticket price in euros: band fame divided by venue capacity
    ///
    /// The result is rounded to two decimal places, exact midpoints to the
    /// even cent (1.125 becomes 1.12), as `%.2f` formatting does.
    ///
    /// # Errors
    ///
    /// - [`RecordError::InvalidSelection`] for an out-of-range position
    /// - [`RecordError::ZeroCapacity`] for a venue that holds nobody
    pub fn ticket_price(
        &mut self,
        band_position: usize,
        venue_position: usize,
    ) -> Result<Decimal, RecordError> {
        let fame = self.band_at(band_position)?.fame;
        let venue = self.venue_at(venue_position)?;

        if venue.capacity == 0 {
            return Err(RecordError::zero_capacity(venue.name.as_str()));
        }

        let price = Decimal::from(fame) / Decimal::from(venue.capacity);
        Ok(price.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }

    /// Release the venue list at shutdown
    ///
    /// # Returns
    ///
    /// The number of venues released. Calling this twice is an error.
    pub fn close(&mut self) -> Result<usize, RecordError> {
        let released = self.venues.destroy()?;
        debug!(released, "venue list released");
        Ok(released)
    }
}

/// Log and drop a malformed record, pass everything else through
fn skip_malformed<T>(result: Result<T, RecordError>) -> Result<Option<T>, RecordError> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(e @ RecordError::ParseError { .. }) => {
            warn!("skipping record: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
