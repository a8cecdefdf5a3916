// CLI module
// Command-line parsing, start-up prompts and the interactive menu

mod args;
mod menu;
mod prompt;

pub use args::{CliArgs, ExportTarget, LoaderType};
pub use menu::MenuSession;
pub use prompt::{print_welcome, resolve_data_files};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown option, `--export` without all three files,
/// or `--help`), clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
