//! Error types for fetching and caching remote graph documents

use thiserror::Error;

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Everything that can go wrong obtaining or caching remote bytes
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection, body read)
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with success
    #[error("HTTP {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Reading or writing a cache slot failed
    #[error("Cache storage error for {key}: {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn storage(key: &str, source: std::io::Error) -> Self {
        FetchError::Storage {
            key: key.to_string(),
            source,
        }
    }
}
