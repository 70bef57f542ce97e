use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::model::{Dataset, Row};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a comma-separated file.
///
/// Layout: no header row, every field numeric, column 0 is time in seconds.
/// The first row fixes the column count for the rest of the file.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| Error::input_open(path, e))?;
    let dataset = load_from_reader(file)?;
    info!(
        "Loaded {} rows ({} columns) from {}",
        dataset.len(),
        dataset.column_count(),
        path.display()
    );
    Ok(dataset)
}

/// Load a dataset from any byte source. Empty input yields an empty dataset.
///
/// Blank lines, including ones between data rows, are skipped rather than
/// counted as zero-column rows. Quote characters have no special meaning:
/// `"0"` is a token like any other and fails to parse.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut expected = 0;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(Error::Read)?;
        let line = record
            .position()
            .map_or(index as u64 + 1, |pos| pos.line());

        let values = parse_record(&record, line)?;

        if rows.is_empty() {
            expected = values.len();
        } else if values.len() != expected {
            return Err(Error::Schema {
                line,
                found: values.len(),
                expected,
            });
        }

        rows.push(Row::new(values));
    }

    debug!("Parsed {} rows, {expected} columns each", rows.len());
    Ok(Dataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Parse every field of a record as `f64`.
///
/// A line ending in `,` produces one empty trailing field; it is dropped so
/// files in the writer's format load back unchanged.
fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Vec<f64>> {
    let mut fields: Vec<&str> = record.iter().collect();
    if fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }

    fields
        .into_iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| Error::TokenParse {
                token: token.to_string(),
                line,
            })
        })
        .collect()
}
