use log::{debug, warn};

use super::model::{Dataset, Row};
use crate::error::{Error, Result};

/// Largest number of output rows [`check_input`] accepts.
pub const MAX_OUTPUT_ROWS: usize = 100_000_000;

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

/// Verify that `input` can be resampled at `frequency`.
///
/// [`resample`] does not check any of this itself: it needs a positive
/// finite frequency, at least two rows, finite and strictly increasing times,
/// and an output grid of at most [`MAX_OUTPUT_ROWS`] rows.
pub fn check_input(input: &Dataset, frequency: f64) -> Result<()> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(Error::InvalidFrequency(frequency));
    }

    if input.len() < 2 {
        return Err(Error::TooFewRows { found: input.len() });
    }

    if let Some((index, row)) = input
        .rows()
        .iter()
        .enumerate()
        .find(|(_, row)| !row.time().is_finite())
    {
        return Err(Error::NonFiniteTime {
            row: index + 1,
            time: row.time(),
        });
    }

    for (index, pair) in input.rows().windows(2).enumerate() {
        let (previous, current) = (pair[0].time(), pair[1].time());
        if current <= previous {
            return Err(Error::NonIncreasingTime {
                row: index + 2,
                previous,
                current,
            });
        }
    }

    if let (Some(first), Some(last)) = (input.first_time(), input.last_time()) {
        let steps = ((last - first) * frequency).floor();
        // `steps + 1` rows; an overflowed span is infinite and fails too.
        if steps >= MAX_OUTPUT_ROWS as f64 {
            return Err(Error::OutputTooLarge {
                rows: steps + 1.0,
                limit: MAX_OUTPUT_ROWS,
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Resampling
// ---------------------------------------------------------------------------

/// Resample `input` onto a uniform grid of `frequency` Hz starting at the
/// first input time and ending at or before the last one.
///
/// Output times are produced by repeatedly adding `1 / frequency` to the
/// first input time. An output time equal to the time of an input row
/// copies that row; every other output row is interpolated channel by
/// channel from the bracketing pair of input rows.
///
/// Inputs violating [`check_input`] give meaningless numbers rather than a
/// panic, as long as the output grid fits in memory. With fewer than two
/// rows the input is returned unchanged.
pub fn resample(input: &Dataset, frequency: f64) -> Dataset {
    let rows = input.rows();
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Dataset::default();
    };
    if rows.len() < 2 {
        return input.clone();
    }

    let step = 1.0 / frequency;
    let len = output_len(first.time(), last.time(), frequency);
    debug!("Resampling {} rows to {len} rows, step {step} s", rows.len());
    if len == 1 {
        warn!("Output frequency {frequency} Hz is too low for the input span, producing a single row");
    }

    let mut output = Vec::with_capacity(len.min(MAX_OUTPUT_ROWS));
    let mut time = first.time();
    let mut cursor = 0;

    for _ in 0..len {
        let row = if time == rows[cursor].time() {
            rows[cursor].clone()
        } else {
            advance_cursor(&mut cursor, rows, time);
            let right = &rows[cursor + 1];
            if time == right.time() {
                right.clone()
            } else {
                interpolate(&rows[cursor], right, time)
            }
        };
        output.push(row);
        time += step;
    }

    Dataset::from_rows(output)
}

/// `floor((last - first) * frequency) + 1`, saturating.
fn output_len(first: f64, last: f64, frequency: f64) -> usize {
    (((last - first) * frequency).floor() as usize).saturating_add(1)
}

/// Move `cursor` forward until `rows[cursor]` and `rows[cursor + 1]` bracket
/// `time`, i.e. `rows[cursor].time() < time <= rows[cursor + 1].time()`.
///
/// The cursor never moves backwards and stops at the last interval.
fn advance_cursor(cursor: &mut usize, rows: &[Row], time: f64) {
    let last_interval = rows.len().saturating_sub(2);
    while *cursor < last_interval {
        if rows[*cursor].time() < time && rows[*cursor + 1].time() >= time {
            break;
        }
        *cursor += 1;
    }
}

/// Build the row at `time` on the segment from `left` to `right`.
fn interpolate(left: &Row, right: &Row, time: f64) -> Row {
    let mut values = Vec::with_capacity(left.len());
    values.push(time);
    values.extend(
        left.channels()
            .iter()
            .zip(right.channels())
            .map(|(&y0, &y1)| lerp(left.time(), time, right.time(), y0, y1)),
    );
    Row::new(values)
}

/// Value at `x` on the line through `(x0, y0)` and `(x1, y1)`.
pub fn lerp(x0: f64, x: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (x - x0) / (x1 - x0) * (y1 - y0) + y0
}
