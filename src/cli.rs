//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Resample a comma-separated time series to a fixed output frequency
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rusty-resample",
    version,
    about = "Resample a comma-separated time series to a fixed output frequency",
    after_help = "First column of input file is assumed to be time in seconds.\n\
                  Input file must not contain header rows.\n\
                  Input file must be comma-separated.\n\
                  -h/--help and -V/--version are honoured in any position."
)]
pub struct Cli {
    /// Output frequency in Hz
    #[arg(
        value_name = "OUTPUT_FREQUENCY_HZ",
        value_parser = parse_frequency,
        allow_negative_numbers = true
    )]
    pub frequency: f64,

    /// Input file name
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file name
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

fn parse_frequency(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("Failed to convert '{s}' to output frequency"))
}

/// How a failed parse is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// `--help` / `--version`: clap's text on stdout, success.
    ///
    /// Takes precedence over argument counting, so `--help in.csv out.csv`
    /// prints help even though it has three arguments.
    Info,
    /// Wrong number of arguments: usage on stdout, failure
    Usage,
    /// An argument is present but invalid: clap's message on stderr, failure
    InvalidArgument,
}

impl ParseFailure {
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::Info,
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Self::Usage,
            _ => Self::InvalidArgument,
        }
    }
}

/// Print a clap error the way this tool reports it and pick the exit code.
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match ParseFailure::from_kind(err.kind()) {
        ParseFailure::Info => {
            print_clap_error(err);
            ExitCode::SUCCESS
        }
        ParseFailure::Usage => {
            log::debug!("{err}");
            print!("{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
        ParseFailure::InvalidArgument => {
            print_clap_error(err);
            ExitCode::FAILURE
        }
    }
}

fn print_clap_error(err: &clap::Error) {
    if let Err(e) = err.print() {
        log::warn!("Failed to print argument error: {e}");
    }
}
