//! Cache-aware fetching: reuse a fresh slot, otherwise download and store

use crate::clock::{Clock, SystemClock};
use crate::download::{Downloader, HttpDownloader};
use crate::error::Result;
use crate::store::{BlobStore, DirStore};
use std::path::PathBuf;
use std::time::Duration;

/// Resolves a URL to bytes, possibly from cache.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Return the bytes for `url`.
    ///
    /// A slot under `cache_key` no older than `max_age` is returned without
    /// network access unless `force_refresh` is set. Otherwise the URL is
    /// downloaded and the slot overwritten. Errors are passed through as-is.
    async fn fetch(
        &self,
        max_age: Duration,
        url: &str,
        cache_key: &str,
        force_refresh: bool,
    ) -> Result<Vec<u8>>;
}

#[async_trait::async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn fetch(
        &self,
        max_age: Duration,
        url: &str,
        cache_key: &str,
        force_refresh: bool,
    ) -> Result<Vec<u8>> {
        (**self).fetch(max_age, url, cache_key, force_refresh).await
    }
}

/// Cache slot name for a URL: its final path segment.
///
/// Trailing slashes are ignored, so `https://host/store/` maps to `store`.
/// Different URLs with the same final segment share a slot.
pub fn cache_key_for(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// [`Fetcher`] composed from a downloader, a blob store and a clock.
#[derive(Debug)]
pub struct CacheFetcher<D, S, C = SystemClock> {
    downloader: D,
    store: S,
    clock: C,
}

impl CacheFetcher<HttpDownloader, DirStore, SystemClock> {
    /// HTTP downloads cached as files in `cache_dir`.
    pub fn http(cache_dir: impl Into<PathBuf>) -> Self {
        Self::new(HttpDownloader::new(), DirStore::new(cache_dir), SystemClock)
    }
}

impl<D, S, C> CacheFetcher<D, S, C>
where
    D: Downloader,
    S: BlobStore,
    C: Clock,
{
    pub fn new(downloader: D, store: S, clock: C) -> Self {
        Self {
            downloader,
            store,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait::async_trait]
impl<D, S, C> Fetcher for CacheFetcher<D, S, C>
where
    D: Downloader,
    S: BlobStore,
    C: Clock,
{
    async fn fetch(
        &self,
        max_age: Duration,
        url: &str,
        cache_key: &str,
        force_refresh: bool,
    ) -> Result<Vec<u8>> {
        if force_refresh {
            tracing::debug!("Cache bypassed for {} (forced refresh)", cache_key);
        } else if let Some(blob) = self.store.read(cache_key)? {
            let age = blob.age(self.clock.now());
            if age <= max_age {
                tracing::debug!("Cache hit for {} (age {:?})", cache_key, age);
                return Ok(blob.bytes);
            }
            tracing::debug!("Cache stale for {} (age {:?} > {:?})", cache_key, age, max_age);
        } else {
            tracing::debug!("Cache miss for {}", cache_key);
        }

        let bytes = self.downloader.download(url).await?;
        self.store.write(cache_key, &bytes, self.clock.now())?;
        Ok(bytes)
    }
}
