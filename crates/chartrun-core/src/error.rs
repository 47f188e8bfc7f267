// File: crates/chartrun-core/src/error.rs
// Summary: Error taxonomy for loading, validating, rendering, and presenting charts.

use std::path::PathBuf;

use crate::request::ChartKind;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no column named '{0}' in table")]
    UnknownColumn(String),

    #[error("column '{column}' row {row}: cannot parse '{value}' as a number")]
    ParseValue { column: String, row: usize, value: String },

    #[error("{kind}: {left_name} has {left} values but {right_name} has {right}")]
    LengthMismatch {
        kind: ChartKind,
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    #[error("heatmap matrix is not rectangular: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix { row: usize, expected: usize, found: usize },

    #[error("{kind}: {what} is empty")]
    Empty { kind: ChartKind, what: &'static str },

    #[error("{kind}: expected {expected} data")]
    DataShape { kind: ChartKind, expected: &'static str },

    #[error("invalid {option} '{value}'")]
    InvalidStyle { option: &'static str, value: String },

    #[error("pie values must be non-negative with a positive sum")]
    InvalidPieValues,

    #[error("series operation {op}: {reason}")]
    SeriesOp { op: &'static str, reason: String },

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode canvas as PNG")]
    Encode,

    #[error("interactive display unavailable: {0}")]
    DisplayUnavailable(String),

    #[error("display error: {0}")]
    Display(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn style(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidStyle { option, value: value.into() }
    }
}
