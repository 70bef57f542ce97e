// ---------------------------------------------------------------------------
// Row – one time-stamped observation
// ---------------------------------------------------------------------------

/// A single observation: `values[0]` is the time in seconds, the rest are
/// channel values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<f64>,
}

impl Row {
    pub fn new(values: Vec<f64>) -> Self {
        Row { values }
    }

    /// Time in seconds (column 0). NaN for an empty row.
    pub fn time(&self) -> f64 {
        self.values.first().copied().unwrap_or(f64::NAN)
    }

    /// Channel values (every column after time).
    pub fn channels(&self) -> &[f64] {
        self.values.get(1..).unwrap_or(&[])
    }

    /// All columns, time included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for Row {
    fn from(values: Vec<f64>) -> Self {
        Row::new(values)
    }
}

// ---------------------------------------------------------------------------
// Dataset – rows ordered by time
// ---------------------------------------------------------------------------

/// An ordered sequence of rows sharing one column count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Dataset { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns per row, time included. Zero for an empty dataset.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    pub fn first_time(&self) -> Option<f64> {
        self.rows.first().map(Row::time)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.rows.last().map(Row::time)
    }
}

impl From<Vec<Vec<f64>>> for Dataset {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Dataset::from_rows(rows.into_iter().map(Row::new).collect())
    }
}
