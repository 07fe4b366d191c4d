use std::path::PathBuf;
use std::time::SystemTimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode archive response for {url}")]
    ResponseDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Archive request failed for {url} after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last_error: Option<Box<ArchiveError>>,
    },

    #[error("Inconsistent daily series for {location}: {message}")]
    SeriesShape { location: String, message: String },

    #[error("Failed to read series cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode series cache file '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode series cache")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Failed to write series cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to read metadata for cache file '{0}'")]
    CacheMetadataRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to calculate cache age for '{0}'")]
    SystemTimeCalculation(PathBuf, #[source] SystemTimeError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ArchiveError {
    /// Whether the failure is worth retrying (network hiccup or a
    /// server-side status), as opposed to a client bug or bad response body.
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            ArchiveError::NetworkRequest(_, _) => true,
            ArchiveError::HttpStatus { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}
