//! Error types for loading, resampling and writing datasets.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the load → resample → write pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened
    #[error("Failed to open '{}' for input", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("Failed to open '{}' for output", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be read or decoded
    #[error("Failed to read input")]
    Read(#[source] csv::Error),

    /// Output could not be written
    #[error("Failed to write output")]
    Write(#[source] csv::Error),

    /// A field is not a number
    #[error("Failed to convert '{token}' to a number on line {line}")]
    TokenParse { token: String, line: u64 },

    /// A row's column count differs from the first row's
    #[error("On line {line}, found {found} columns, expected {expected}")]
    Schema {
        line: u64,
        found: usize,
        expected: usize,
    },

    /// Output frequency is zero, negative or not finite
    #[error("Output frequency must be a positive finite number, got {0}")]
    InvalidFrequency(f64),

    /// Not enough rows to form an interpolation interval
    #[error("At least 2 rows are required for resampling, found {found}")]
    TooFewRows { found: usize },

    /// A timestamp is infinite or NaN
    #[error("Time must be finite: row {row} has time {time}")]
    NonFiniteTime { row: usize, time: f64 },

    /// The output grid would have more rows than can be produced
    #[error("Output would have {rows} rows, the limit is {limit}")]
    OutputTooLarge { rows: f64, limit: usize },

    /// Timestamps are not strictly increasing
    #[error("Time must be strictly increasing: row {row} has time {current} after {previous}")]
    NonIncreasingTime {
        row: usize,
        previous: f64,
        current: f64,
    },
}

impl Error {
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    pub fn output_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputOpen {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, Error>;
