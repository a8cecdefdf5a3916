//! Console menu over a loaded [`RecordStore`]
//!
//! The session reads one choice per line and writes plain text prompts, so
//! it runs the same against a terminal or a scripted buffer.

use crate::cli::prompt::next_token;
use crate::core::RecordStore;
use crate::types::{RecordError, RecordName};
use std::io::{BufRead, Write};
use tracing::debug;

const MAIN_MENU: &str = "\n1. Show bands or venues | 2. Calculate ticket price | 3. Show band members | 4. Exit\nSelect option: ";
const LISTING_MENU: &str = " \n1. Show bands | 2. Show venues\nSelect option: ";
const WRONG_OPTION: &str = "Wrong option number";

/// One line of user input, interpreted as a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Number(usize),
    Invalid,
    EndOfInput,
}

/// Whether the session keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive menu loop
///
/// # Examples
///
/// ```
/// use gig_records::cli::MenuSession;
/// use gig_records::core::RecordStore;
///
/// let mut store = RecordStore::load(
///     "1\nThe Cursors\n9000\n1\n".as_bytes(),
///     "0\n".as_bytes(),
///     "Arena A\n5000\n".as_bytes(),
/// )
/// .unwrap();
///
/// let mut output = Vec::new();
/// MenuSession::new(&mut store, "2\n1\n1\n4\n".as_bytes(), &mut output)
///     .run()
///     .unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("The minimum ticket price is 1.80 euros"));
/// ```
pub struct MenuSession<'s, R: BufRead, W: Write> {
    store: &'s mut RecordStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> MenuSession<'s, R, W> {
    pub fn new(store: &'s mut RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only I/O failures and venue list contract violations end the session
    /// with an error. Bad choices are reported on the output and asked again.
    pub fn run(mut self) -> Result<(), RecordError> {
        loop {
            self.write(MAIN_MENU)?;

            let flow = match self.read_choice()? {
                Choice::Number(1) => self.show_listing()?,
                Choice::Number(2) => self.show_ticket_price()?,
                Choice::Number(3) => self.show_members()?,
                Choice::Number(4) | Choice::EndOfInput => Flow::Quit,
                Choice::Number(_) | Choice::Invalid => {
                    self.error_line(WRONG_OPTION)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                self.write("\nBye!\n")?;
                return Ok(());
            }
        }
    }

    fn show_listing(&mut self) -> Result<Flow, RecordError> {
        loop {
            self.write(LISTING_MENU)?;

            match self.read_choice()? {
                Choice::Number(1) => {
                    self.print_bands()?;
                    return Ok(Flow::Continue);
                }
                Choice::Number(2) => {
                    self.print_venues()?;
                    return Ok(Flow::Continue);
                }
                Choice::EndOfInput => return Ok(Flow::Quit),
                Choice::Number(_) | Choice::Invalid => self.error_line(WRONG_OPTION)?,
            }
        }
    }

    fn print_bands(&mut self) -> Result<(), RecordError> {
        self.write("\nBands:\n")?;
        let names: Vec<RecordName> = self.store.bands().iter().map(|b| b.name.clone()).collect();
        self.print_numbered(&names)
    }

    fn print_venues(&mut self) -> Result<(), RecordError> {
        self.write("\nVenues:\n")?;
        let names = self.store.venue_names()?;
        self.print_numbered(&names)
    }

    fn print_numbered(&mut self, names: &[RecordName]) -> Result<(), RecordError> {
        for (index, name) in names.iter().enumerate() {
            writeln!(self.output, "\t{} - {}", index + 1, name)?;
        }
        Ok(())
    }

    fn show_ticket_price(&mut self) -> Result<Flow, RecordError> {
        let bands = self.store.bands().len();
        let venues = self.store.venue_count();
        if !self.ensure_loaded("bands", bands)? || !self.ensure_loaded("venues", venues)? {
            return Ok(Flow::Continue);
        }

        let Some(band) = self.select("band", bands)? else {
            return Ok(Flow::Quit);
        };
        let Some(venue) = self.select("venue", venues)? else {
            return Ok(Flow::Quit);
        };

        match self.store.ticket_price(band, venue) {
            Ok(price) => {
                writeln!(self.output, "\nThe minimum ticket price is {:.2} euros", price)?;
            }
            Err(e @ RecordError::ZeroCapacity { .. }) => {
                self.error_line(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn show_members(&mut self) -> Result<Flow, RecordError> {
        let bands = self.store.bands().len();
        if !self.ensure_loaded("bands", bands)? {
            return Ok(Flow::Continue);
        }

        let Some(band) = self.select("band", bands)? else {
            return Ok(Flow::Quit);
        };

        let names: Vec<RecordName> = self
            .store
            .members_of(band)?
            .iter()
            .map(|m| m.name.clone())
            .collect();

        self.write("\nMembers:\n")?;
        for name in names {
            writeln!(self.output, "\t- {}", name)?;
        }
        Ok(Flow::Continue)
    }

    /// Report an empty collection instead of asking for a position in it
    fn ensure_loaded(&mut self, what: &str, count: usize) -> Result<bool, RecordError> {
        if count == 0 {
            self.error_line(&format!("No {} loaded", what))?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Ask for a 1-based position until one in `1..=available` is entered
    ///
    /// `Ok(None)` means input ended.
    fn select(
        &mut self,
        kind: &'static str,
        available: usize,
    ) -> Result<Option<usize>, RecordError> {
        loop {
            self.write(&format!("\nSelect {} number: ", kind))?;

            match self.read_choice()? {
                Choice::Number(position) if (1..=available).contains(&position) => {
                    debug!(kind, position, "selection made");
                    return Ok(Some(position));
                }
                Choice::EndOfInput => return Ok(None),
                Choice::Number(_) | Choice::Invalid => {
                    self.error_line(&format!("Invalid {} number", kind))?;
                }
            }
        }
    }

    fn read_choice(&mut self) -> Result<Choice, RecordError> {
        let choice = match next_token(&mut self.input)? {
            None => Choice::EndOfInput,
            Some(token) => token
                .parse::<usize>()
                .map(Choice::Number)
                .unwrap_or(Choice::Invalid),
        };
        Ok(choice)
    }

    fn error_line(&mut self, message: &str) -> Result<(), RecordError> {
        writeln!(self.output, "ERROR: {}", message)?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), RecordError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
