//! Cache-backed fetching of remote graph documents
//!
//! A [`CacheFetcher`] combines three capabilities: a [`Downloader`] that
//! moves bytes, a [`BlobStore`] that keeps them under a key, and a [`Clock`]
//! that decides whether a stored copy is still fresh. Tests swap each of
//! them for an in-memory fake.

pub mod clock;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod store;


pub use clock::{Clock, ManualClock, SystemClock};
pub use download::{Downloader, HttpDownloader};
pub use error::{FetchError, Result};
pub use fetcher::{CacheFetcher, Fetcher, cache_key_for};
pub use store::{BlobStore, CachedBlob, DirStore, MemoryStore};

pub use reqwest::StatusCode;
