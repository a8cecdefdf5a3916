use crate::strategy::DataFiles;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Browse bands, musicians and venues and price concert tickets
#[derive(Parser, Debug)]
#[command(name = "gig-records")]
#[command(about = "Browse bands, musicians and venues and price concert tickets", long_about = None)]
pub struct CliArgs {
    /// Bands file (prompted for when omitted)
    #[arg(long, value_name = "PATH", help = "Path to the bands file")]
    pub bands: Option<PathBuf>,

    /// Musicians file (prompted for when omitted)
    #[arg(long, value_name = "PATH", help = "Path to the musicians file")]
    pub musicians: Option<PathBuf>,

    /// Venues file (prompted for when omitted)
    #[arg(long, value_name = "PATH", help = "Path to the venues file")]
    pub venues: Option<PathBuf>,

    /// How the input files are read
    #[arg(
        long = "loader",
        value_name = "LOADER",
        default_value = "sync",
        help = "Loading strategy: 'sync' reads files one by one, 'async' reads them concurrently"
    )]
    pub loader: LoaderType,

    /// Runtime worker threads (async loader only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Worker threads for the async loader (default: 3)"
    )]
    pub worker_threads: Option<usize>,

    /// Write a listing as CSV to stdout instead of starting the menu
    #[arg(
        long = "export",
        value_name = "LISTING",
        requires_all = ["bands", "musicians", "venues"],
        help = "Export 'bands' or 'venues' as CSV and exit (needs all three file paths)"
    )]
    pub export: Option<ExportTarget>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available loading strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LoaderType {
    Sync,
    Async,
}

/// Listings that can be exported as CSV
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Bands,
    Venues,
}

impl CliArgs {
    /// All three file paths, if every one was given on the command line
    pub fn data_files(&self) -> Option<DataFiles> {
        match (&self.bands, &self.musicians, &self.venues) {
            (Some(bands), Some(musicians), Some(venues)) => {
                Some(DataFiles::new(bands, musicians, venues))
            }
            _ => None,
        }
    }

    /// Log filter directive for the tracing subscriber
    ///
    /// Warnings only by default, so skipped records are still reported.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_loader(&["program"], LoaderType::Sync)]
    #[case::explicit_sync(&["program", "--loader", "sync"], LoaderType::Sync)]
    #[case::explicit_async(&["program", "--loader", "async"], LoaderType::Async)]
    fn test_loader_parsing(#[case] args: &[&str], #[case] expected: LoaderType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.loader, expected);
    }

    #[rstest]
    #[case::none(&["program"], None)]
    #[case::partial(&["program", "--bands", "b.txt", "--venues", "v.txt"], None)]
    #[case::all(
        &["program", "--bands", "b.txt", "--musicians", "m.txt", "--venues", "v.txt"],
        Some(DataFiles::new("b.txt", "m.txt", "v.txt"))
    )]
    fn test_data_files(#[case] args: &[&str], #[case] expected: Option<DataFiles>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_files(), expected);
    }

    #[rstest]
    #[case::bands(ExportTarget::Bands, "bands")]
    #[case::venues(ExportTarget::Venues, "venues")]
    fn test_export_with_all_files(#[case] expected: ExportTarget, #[case] listing: &str) {
        let args = [
            "program", "--bands", "b.txt", "--musicians", "m.txt", "--venues", "v.txt",
            "--export", listing,
        ];
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.export, Some(expected));
    }

    #[rstest]
    #[case::quiet(&["program"], "warn")]
    #[case::short_verbose(&["program", "-v"], "debug")]
    #[case::long_verbose(&["program", "--verbose"], "debug")]
    fn test_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_filter(), expected);
    }

    #[rstest]
    #[case::worker_threads(&["program", "--worker-threads", "8"], Some(8))]
    #[case::no_worker_threads(&["program"], None)]
    fn test_worker_threads(#[case] args: &[&str], #[case] expected: Option<usize>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.worker_threads, expected);
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_loader(&["program", "--loader", "threaded"])]
    #[case::invalid_export(&["program", "--bands", "b", "--musicians", "m", "--venues", "v", "--export", "musicians"])]
    #[case::export_without_files(&["program", "--export", "venues"])]
    #[case::export_missing_one_file(&["program", "--bands", "b", "--venues", "v", "--export", "bands"])]
    #[case::worker_threads_not_a_number(&["program", "--worker-threads", "many"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
