//! Error taxonomy shared by the loader, the assembler and the chart builders.
//!
//! Library code returns these typed errors; the binary wraps them in `anyhow`
//! for startup failures, and the web layer maps them to HTTP status codes.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading an indicator CSV.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file is missing, unreadable, or not valid CSV.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The column layout does not match the declared [`TableLayout`](crate::models::TableLayout).
    #[error("{}: schema mismatch: {reason}", path.display())]
    SchemaMismatch { path: PathBuf, reason: String },

    /// A year cell holds something that is neither a number nor a missing marker.
    #[error("{}: row {row}, column '{column}': '{value}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
}

/// A selected year that one of the loaded tables does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("year not found: '{year}' is not available for {indicator}")]
pub struct YearNotFound {
    pub year: String,
    pub indicator: String,
}

/// Failures while building or rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot build {chart}: no data")]
    Empty { chart: &'static str },

    #[error("render failed: {0}")]
    Render(String),
}
