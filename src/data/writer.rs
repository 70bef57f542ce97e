use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::model::Dataset;
use crate::error::{Error, Result};

/// Significant digits written per value.
pub const PRECISION: usize = 14;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Write `dataset` to a new file at `path`, replacing any existing file.
pub fn write_file(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::output_open(path, e))?;
    write_to(file, dataset)?;
    info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Write one line per row, every value followed by a comma.
pub fn write_to<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in dataset.rows() {
        // The empty last field produces the trailing comma.
        let fields = row
            .values()
            .iter()
            .map(|&v| format_value(v))
            .chain(std::iter::once(String::new()));
        writer.write_record(fields).map_err(Error::Write)?;
    }

    writer
        .flush()
        .map_err(|e| Error::Write(csv::Error::from(e)))
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Format like C's `%.14g`: [`PRECISION`] significant digits, fixed
/// notation for decimal exponents in `-4..14`, scientific otherwise, and no
/// trailing zeros.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent has to be taken after rounding: 9.99999999999999951 is 10.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..PRECISION as i32).contains(&exponent) {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        let fixed = format!("{value:.decimals$}");
        trim_fraction(&fixed).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

/// Strip trailing zeros after the decimal point, and the point itself.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
