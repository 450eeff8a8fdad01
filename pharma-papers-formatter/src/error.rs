use std::{io, result};

use thiserror::Error;

/// Error types for report output
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, FormatError>;
