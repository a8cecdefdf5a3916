//! Gig Records CLI
//!
//! Console tool for browsing bands, musicians and venues and pricing
//! concert tickets.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bands bands.txt --musicians musicians.txt --venues venues.txt
//! cargo run -- --loader async --bands bands.txt --musicians musicians.txt --venues venues.txt
//! cargo run -- --bands bands.txt --musicians musicians.txt --venues venues.txt --export venues > venues.csv
//! ```
//!
//! File names not given as options are asked for on start-up. With
//! `--export` the listing is written as CSV to stdout and no menu is shown.
//!
//! # Loading Strategies
//!
//! - **sync**: Reads the three files one after another (default)
//! - **async**: Reads the three files concurrently on a tokio runtime
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable count header, etc.)

use gig_records::cli::{self, CliArgs, ExportTarget, MenuSession};
use gig_records::io::{write_bands_csv, write_venues_csv};
use gig_records::strategy;
use gig_records::types::RecordError;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    // Logs go to stderr; stdout carries the menu or the CSV
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), RecordError> {
    let strategy = strategy::create_strategy(args.loader, args.worker_threads);

    if let Some(target) = args.export {
        let files = args.data_files().ok_or_else(|| {
            RecordError::usage("--export needs --bands, --musicians and --venues")
        })?;
        let store = strategy.load(&files)?;

        let mut output = io::stdout().lock();
        match target {
            ExportTarget::Bands => write_bands_csv(store.bands(), &mut output)?,
            ExportTarget::Venues => write_venues_csv(store.venues(), &mut output)?,
        }
        output.flush()?;
        return Ok(());
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    cli::print_welcome(&mut output)?;
    let files = cli::resolve_data_files(args, &mut input, &mut output)?;
    let mut store = strategy.load(&files)?;

    MenuSession::new(&mut store, &mut input, &mut output).run()?;
    store.close()?;
    Ok(())
}
