//! Byte transport for remote graph documents

use crate::error::{FetchError, Result};

/// Fetches the full body at a URL.
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

#[async_trait::async_trait]
impl<D: Downloader + ?Sized> Downloader for std::sync::Arc<D> {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        (**self).download(url).await
    }
}

/// Plain HTTP GET. No timeout is imposed beyond the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let http_err = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(http_err)?;
        tracing::info!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
