use clap::{Parser, ValueHint};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod document;
pub mod error;
pub mod json;
pub mod logging;
pub mod tsv;

pub use document::{AlignPolicy, Document, Record};
pub use error::{Error, Result};
pub use json::JsonOpts;
pub use tsv::TsvOpts;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"), author = "Dominik Moritz <domoritz@cmu.edu>")]
struct Opts<I: clap::Args, O: clap::Args> {
    /// Input file. The output is written next to it with a .json extension.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Options specific to the input format we're parsing
    #[command(flatten)]
    input_format: I,

    /// Options specific to the output format we're writing
    #[command(flatten)]
    output_format: O,
}

pub fn run<I, O>() -> Result<()>
where
    I: clap::Args,
    I: InputFormat,
    O: clap::Args,
    O: OutputFormat,
{
    let opts: Opts<I, O> = Opts::parse();

    convert(&opts.input, &opts.input_format, &opts.output_format).map(|_| ())
}

/// Reads `input`, writes the converted document next to it and returns the output path.
///
/// The output file is only created once the whole input has been parsed.
pub fn convert<I, O>(input: &Path, input_format: &I, output_format: &O) -> Result<PathBuf>
where
    I: InputFormat,
    O: OutputFormat,
{
    debug!(input = %input.display(), "reading");

    let document = {
        let file = File::open(input).map_err(|source| Error::Input {
            path: input.to_path_buf(),
            source,
        })?;
        input_format.read_document(BufReader::new(file))?
    };

    let output = output_path(input, output_format.extension());
    let bytes = output_format.encode(&document)?;

    debug!(output = %output.display(), bytes = bytes.len(), "writing");
    fs::write(&output, bytes).map_err(|source| Error::Output {
        path: output.clone(),
        source,
    })?;

    Ok(output)
}

/// `input` with its extension replaced by `extension`, or appended when it has none.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

pub trait InputFormat {
    fn read_document<R: Read>(&self, input: R) -> Result<Document>;
}

pub trait OutputFormat {
    fn extension(&self) -> &'static str;

    fn encode(&self, document: &Document) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Opts::<TsvOpts, JsonOpts>::command().debug_assert();
    }

    #[test]
    fn input_flag_has_short_and_long_forms() {
        let short = Opts::<TsvOpts, JsonOpts>::try_parse_from(["tsv2json", "-i", "a.tsv"]).unwrap();
        let long =
            Opts::<TsvOpts, JsonOpts>::try_parse_from(["tsv2json", "--input", "a.tsv"]).unwrap();
        assert_eq!(short.input, PathBuf::from("a.tsv"));
        assert_eq!(long.input, PathBuf::from("a.tsv"));
    }

    #[test]
    fn input_flag_is_required() {
        assert!(Opts::<TsvOpts, JsonOpts>::try_parse_from(["tsv2json"]).is_err());
        assert!(
            Opts::<TsvOpts, JsonOpts>::try_parse_from(["tsv2json", "-i", "a", "-x"]).is_err()
        );
    }

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(output_path(Path::new("dir/data.tsv"), "json"), PathBuf::from("dir/data.json"));
        assert_eq!(output_path(Path::new("data"), "json"), PathBuf::from("data.json"));
        assert_eq!(output_path(Path::new("a.b.csv"), "json"), PathBuf::from("a.b.json"));
        assert_eq!(output_path(Path::new(".tsv"), "json"), PathBuf::from(".tsv.json"));
    }

    #[test]
    fn convert_writes_sibling_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rows.tsv");
        fs::write(&input, "a\tb\tc\n1\t2\t3\n\t\t\n").unwrap();

        let output = convert(&input, &TsvOpts::default(), &JsonOpts).unwrap();

        assert_eq!(output, dir.path().join("rows.json"));
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"[["1","2","3"]]"#);
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.tsv");

        let err = convert(&input, &TsvOpts::default(), &JsonOpts).unwrap_err();

        assert!(matches!(err, Error::Input { .. }));
        assert!(!dir.path().join("absent.json").exists());
    }

    #[test]
    fn strict_failure_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ragged.tsv");
        fs::write(&input, "a\tb\n1\n").unwrap();

        let opts = TsvOpts::with_policy(AlignPolicy::Strict);
        let err = convert(&input, &opts, &JsonOpts).unwrap_err();

        assert!(matches!(err, Error::FieldCount { row: 0, .. }));
        assert!(!dir.path().join("ragged.json").exists());
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rows.tsv");
        fs::write(&input, "a\n1\n").unwrap();
        fs::create_dir(dir.path().join("rows.json")).unwrap();

        let err = convert(&input, &TsvOpts::default(), &JsonOpts).unwrap_err();

        assert!(matches!(err, Error::Output { .. }));
    }
}
