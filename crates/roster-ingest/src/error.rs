//! Error types for roster loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the initial roster.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The HTTP request could not be built, sent or read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Reading a local roster file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a JSON array.
    #[error("invalid roster payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The source string is empty.
    #[error("roster source must not be empty")]
    EmptySource,
}

impl IngestError {
    /// Returns whether the failure happened before any data was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. } | Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
