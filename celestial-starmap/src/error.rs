//! Error type for catalog ingestion.
//!
//! | Variant | Raised by | Effect |
//! |---------|-----------|--------|
//! | [`InvalidField`](Error::InvalidField) | malformed `RA`, `Dec` or `Distance` | aborts the run |
//! | [`MissingColumn`](Error::MissingColumn) | CSV header without a positional column | aborts the run |
//! | [`InvalidConfig`](Error::InvalidConfig) | [`StarmapConfig::validate`](crate::StarmapConfig::validate) | aborts before any I/O |
//! | [`Download`](Error::Download) | archive fetch | aborts the run |
//!
//! Rows with unusable photometry never produce an error; the pipeline skips
//! them and counts them in [`PipelineStats`](crate::PipelineStats).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("row {row}: invalid {field} value {value:?}")]
    InvalidField {
        row: u64,
        field: &'static str,
        value: String,
    },

    #[error("catalog header is missing column: {0}")]
    MissingColumn(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("download of {url} failed: {message}")]
    Download { url: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_field(row: u64, field: &'static str, value: Option<&str>) -> Self {
        Self::InvalidField {
            row,
            field,
            value: value.unwrap_or_default().to_string(),
        }
    }

    pub fn download(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Download {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}
