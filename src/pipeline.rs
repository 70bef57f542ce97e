//! Load → resample → write, start to finish.

use std::path::Path;

use log::info;

use crate::cli::Cli;
use crate::data::{loader, resample, writer};
use crate::error::Result;

/// Row counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub input_rows: usize,
    pub output_rows: usize,
    pub columns: usize,
}

/// Run the pipeline for parsed command-line arguments.
pub fn run(cli: &Cli) -> Result<Summary> {
    resample_file(&cli.input, &cli.output, cli.frequency)
}

/// Resample the file at `input` to `frequency` Hz and write it to `output`.
///
/// Nothing is written unless loading and validation succeed.
pub fn resample_file(input: &Path, output: &Path, frequency: f64) -> Result<Summary> {
    let dataset = loader::load_file(input)?;
    resample::check_input(&dataset, frequency)?;

    let resampled = resample::resample(&dataset, frequency);
    info!(
        "Resampled {} rows to {} rows at {frequency} Hz",
        dataset.len(),
        resampled.len()
    );

    writer::write_file(output, &resampled)?;

    Ok(Summary {
        input_rows: dataset.len(),
        output_rows: resampled.len(),
        columns: resampled.column_count(),
    })
}
