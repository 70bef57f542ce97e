//! Resample comma-separated time series onto a uniform time grid.
//!
//! Column 0 of every row is time in seconds, the remaining columns are
//! channels. Each channel is linearly interpolated between the two input rows
//! bracketing an output time.

pub mod cli;
pub mod data;
pub mod error;
pub mod pipeline;

pub use data::model::{Dataset, Row};
pub use error::{Error, Result};
