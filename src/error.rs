//! Error types for archive-level failures.
//!
//! Only structural problems with the archive itself are surfaced to the
//! caller; per-tile anomalies are recovered or dropped locally so that one
//! bad record never prevents extraction of the rest.

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input ends before the declared header and offset table
    #[error("archive too short: need {expected} bytes for header and offset table, have {actual}")]
    MalformedArchive { expected: usize, actual: usize },

    /// An offset decreases or points past the end of the tile data region
    #[error("offset table corrupt: {0}")]
    OffsetTableCorrupt(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
