//! Interactive start-up: welcome banner and input file prompts

use crate::cli::args::CliArgs;
use crate::io::open_file;
use crate::strategy::DataFiles;
use crate::types::{FileKind, RecordError};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

pub fn print_welcome(output: &mut impl Write) -> Result<(), RecordError> {
    writeln!(output, "Welcome!")?;
    Ok(())
}

/// Read the next non-blank line, trimmed
///
/// Returns `None` at end of input.
pub(crate) fn next_token(input: &mut impl BufRead) -> Result<Option<String>, RecordError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let token = line.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Complete the set of input files, asking for any path not given as an option
///
/// Paths given on the command line are used as-is; a bad one surfaces later
/// as a load error. Prompted names are checked right away and asked for
/// again until one can be opened.
///
/// # Errors
///
/// Fails if input ends before every missing name was entered.
pub fn resolve_data_files(
    args: &CliArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<DataFiles, RecordError> {
    if let Some(files) = args.data_files() {
        return Ok(files);
    }

    write!(output, "\nIntroduce the file names:\n")?;

    let bands = resolve_path(args.bands.as_ref(), FileKind::Bands, input, output)?;
    let musicians = resolve_path(args.musicians.as_ref(), FileKind::Musicians, input, output)?;
    let venues = resolve_path(args.venues.as_ref(), FileKind::Venues, input, output)?;

    Ok(DataFiles::new(bands, musicians, venues))
}

fn resolve_path(
    given: Option<&PathBuf>,
    kind: FileKind,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf, RecordError> {
    if let Some(path) = given {
        return Ok(path.clone());
    }

    loop {
        write!(output, "\t- {}: ", kind)?;
        output.flush()?;

        let Some(name) = next_token(input)? else {
            return Err(RecordError::usage(format!(
                "input ended before the {} file name was entered",
                kind.to_string().to_lowercase()
            )));
        };

        let path = PathBuf::from(&name);
        match open_file(&path) {
            Ok(_) => {
                debug!(file = %kind, path = %path.display(), "input file selected");
                return Ok(path);
            }
            Err(_) => writeln!(output, "ERROR: Can't open file '{}'", name)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn path_arg(file: &NamedTempFile) -> String {
        file.path().display().to_string()
    }

    #[test]
    fn test_welcome() {
        let mut output = Vec::new();
        print_welcome(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Welcome!\n");
    }

    #[test]
    fn test_all_paths_given_skips_prompt() {
        let args = CliArgs::try_parse_from([
            "program", "--bands", "b.txt", "--musicians", "m.txt", "--venues", "v.txt",
        ])
        .unwrap();
        let mut output = Vec::new();

        let files = resolve_data_files(&args, &mut "".as_bytes(), &mut output).unwrap();

        assert_eq!(files, DataFiles::new("b.txt", "m.txt", "v.txt"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_paths_in_order() {
        let musicians = create_temp_file("0\n");
        let venues = create_temp_file("");
        let args = CliArgs::try_parse_from(["program", "--bands", "b.txt"]).unwrap();
        let script = format!("{}\n\n{}\n", path_arg(&musicians), path_arg(&venues));
        let mut output = Vec::new();

        let files = resolve_data_files(&args, &mut script.as_bytes(), &mut output).unwrap();

        assert_eq!(files, DataFiles::new("b.txt", musicians.path(), venues.path()));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nIntroduce the file names:\n\t- Musicians: \t- Venues: "
        );
    }

    #[test]
    fn test_unopenable_name_is_asked_again() {
        let bands = create_temp_file("0\n");
        let args = CliArgs::try_parse_from([
            "program", "--musicians", "m.txt", "--venues", "v.txt",
        ])
        .unwrap();
        let script = format!("no-such-bands.txt\n{}\n", path_arg(&bands));
        let mut output = Vec::new();

        let files = resolve_data_files(&args, &mut script.as_bytes(), &mut output).unwrap();

        assert_eq!(files.bands, bands.path());
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("ERROR: Can't open file 'no-such-bands.txt'\n"));
        assert_eq!(transcript.matches("\t- Bands: ").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let args = CliArgs::try_parse_from(["program"]).unwrap();
        let mut output = Vec::new();

        let result = resolve_data_files(&args, &mut "".as_bytes(), &mut output);

        assert!(matches!(result, Err(RecordError::Usage { .. })));
    }

    #[test]
    fn test_next_token_skips_blank_lines() {
        let mut input = "\n   \n  4  \n".as_bytes();
        assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("4"));
        assert_eq!(next_token(&mut input).unwrap(), None);
    }
}
