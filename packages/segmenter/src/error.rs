//! Error types for the segmenter.
//!
//! Segmentation anomalies (ambiguous sections, missing markers, empty spans)
//! are not errors: they are recorded in the run log and the judgment is
//! still persisted. `SegmenterError` covers the failures that stop a single
//! file or the whole command.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Invalid judgment identifier format.
    #[error("Invalid JID format: '{0}'. Expected COURT,YEAR,CASE,NUMBER,YYYYMMDD[,VERSION] (e.g., TYDV,108,勞訴,12,20200101,1)")]
    InvalidJid(String),

    /// A raw record file could not be interpreted as a judgment.
    #[error("Invalid judgment record {}: {reason}", .path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be started.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;
