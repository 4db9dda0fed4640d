use anyhow::{Context, Result};
use clap::Parser;
use pick::{open_lines, InputSource, PickError, Picker, PickerConfig, ReaderConfig};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

const EXAMPLES: &str = "\
Filter stdin and print specific rows and columns, specifying them in
Python's slicing syntax. Columns are separated by runs of whitespace.

Examples:
  cat myfile | pick :5 0       # Print column 0 of the first 5 rows.
  cat myfile | pick 0 :        # Print the first row, all of it.
  cat myfile | pick -o 1 :     # Same, with one-based indices.
  cat myfile | pick -10: 0:2   # Print the first 2 columns of the last 10 rows.
  cat myfile | pick -2:-1 :    # Print all fields of the second to last row.";

#[derive(Parser, Debug)]
#[command(name = "pick")]
#[command(about = "Select rows and columns of a text stream with Python slice syntax")]
#[command(after_help = EXAMPLES)]
#[command(version)]
struct Args {
    /// Row slice: N, N:M, N:, :M or :
    #[arg(allow_hyphen_values = true)]
    row: String,

    /// Column slice over whitespace-separated fields
    #[arg(allow_hyphen_values = true)]
    column: String,

    /// Treat positive indices as one-based
    #[arg(short = 'o', long = "onebased", short_alias = 'u')]
    one_based: bool,

    /// Read FILE instead of stdin
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Indent output so picked fields keep their original column
    #[arg(short = 'a', long)]
    align: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries picked lines only, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .json()
        .init();

    debug!(?args, "Parsed CLI arguments");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(PickError::InvalidSpec { .. }) = e.downcast_ref::<PickError>() {
                eprintln!("Error: {e}");
                eprintln!("Usage: pick [OPTIONS] ROW COLUMN  (see pick --help)");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = PickerConfig {
        one_based: args.one_based,
        align: args.align,
    };
    // Specs are checked before any input is touched
    let picker = Picker::from_specs(&args.row, &args.column, config)?;

    let source = match &args.file {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };
    let lines = open_lines(&source, &ReaderConfig::default())
        .with_context(|| format!("Failed to open {}", describe(&source)))?;
    let known_total = lines.known_total();

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match picker.write_to(lines, known_total, out) {
        Ok(_) => Ok(()),
        // Downstream closed early (e.g. `| head`); nothing left to do
        Err(PickError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed by reader");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed while picking from {}", describe(&source))),
    }
}

fn describe(source: &InputSource) -> String {
    match source {
        InputSource::Stdin => "stdin".to_string(),
        InputSource::File(path) => path.display().to_string(),
    }
}
