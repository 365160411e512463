//! Error types for lyricbook-core

use thiserror::Error;

use crate::schema::FieldId;

/// Main error type for lyricbook operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required columns: {}", format_fields(missing))]
    MissingRequiredColumns { missing: Vec<FieldId> },

    #[error("File contains no header row")]
    EmptyFile,

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

fn format_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for lyricbook operations
pub type Result<T> = std::result::Result<T, Error>;
