use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::Channel;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HarError>;

/// Everything that can go wrong while loading or exporting a split.
///
/// File-level variants carry the offending path so the caller can tell
/// which of the ten files of a split failed.
#[derive(Debug, Error)]
pub enum HarError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: column {column}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: usize,
        token: String,
    },

    #[error("{}:{line}: '{token}' is not an integer class id", path.display())]
    InvalidLabel {
        path: PathBuf,
        line: u64,
        token: String,
    },

    #[error("{}:{line}: expected {expected} columns, found {found}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{} contains no data rows", path.display())]
    EmptyFile { path: PathBuf },

    #[error("channel {channel}: shape {found:?} does not match {expected:?}")]
    ShapeMismatch {
        channel: Channel,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("label file has {labels} rows but features have {windows} windows")]
    WindowCountMismatch { windows: usize, labels: usize },

    #[error("label {label} is not part of the class vocabulary")]
    UnknownLabel { label: i64 },

    #[error("loading config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),
}
