/// Data layer: core types, loading, resampling and writing.
///
/// Architecture:
/// ```text
///  input.csv (time, ch1, ch2, ...)
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset, check column counts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resample │  uniform time grid, cursor + linear interpolation
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  Dataset → output.csv, `%.14g`, trailing comma
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod resample;
pub mod writer;
