//! Loading a graph from a URL or a local file

use crate::error::{LoadError, Result};
use crate::source::Source;
use depgraph_core::Graph;
use depgraph_fetch::{CacheFetcher, DirStore, Fetcher, HttpDownloader, SystemClock};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Maximum age of a cached remote document: 300 hours.
pub const REMOTE_MAX_AGE: Duration = Duration::from_secs(300 * 60 * 60);

/// Loads graph documents. Holds no state between calls beyond what the
/// fetcher keeps in its cache.
#[derive(Debug)]
pub struct GraphLoader<F> {
    fetcher: F,
}

impl GraphLoader<CacheFetcher<HttpDownloader, DirStore, SystemClock>> {
    /// Remote documents are downloaded over HTTP and cached in `cache_dir`.
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self::new(CacheFetcher::http(cache_dir))
    }
}

impl<F: Fetcher> GraphLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load the graph at `source` and stamp it with `build_id`.
    ///
    /// Sources starting with `http` are fetched through the cache; anything
    /// else is read from the filesystem.
    pub async fn load(&self, build_id: &str, source: &str) -> Result<Graph> {
        let source = Source::parse(source);
        tracing::debug!("Loading graph for build {:?} from {}", build_id, source);

        let data = self.read_source(&source).await?;

        let mut graph = Graph::from_slice(&data).map_err(|e| LoadError::Decode {
            source_name: source.to_string(),
            source: e,
        })?;
        graph.build_id = build_id.to_string();

        tracing::info!(
            "Loaded graph {}: {} nodes, {} edge groups",
            source,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    async fn read_source(&self, source: &Source) -> Result<Vec<u8>> {
        match source {
            Source::Remote { url, cache_key } => self
                .fetcher
                .fetch(REMOTE_MAX_AGE, url, cache_key, false)
                .await
                .map_err(|e| LoadError::RemoteFetch {
                    url: url.clone(),
                    source: e,
                }),
            Source::Local(path) => read_local(path).await,
        }
    }
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    match tokio::fs::metadata(path).await {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        // Anything else surfaces from the read below
        _ => {}
    }

    tokio::fs::read(path).await.map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load with the default loader, caching remote documents in the current
/// directory.
pub async fn load(build_id: &str, source: &str) -> Result<Graph> {
    GraphLoader::with_cache_dir(".").load(build_id, source).await
}
