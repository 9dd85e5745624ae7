//! Error types for graph loading

use depgraph_fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for load operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a graph could not be loaded. No partial graph accompanies any of these.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Downloading or caching the remote document failed
    #[error("problem downloading file {url}: {source}")]
    RemoteFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The local path does not exist
    #[error("could not find file {}", .0.display())]
    NotFound(PathBuf),

    /// The local path exists but could not be read
    #[error("problem reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a graph document
    #[error("problem reading json from {source_name}: {source}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode { .. })
    }
}
