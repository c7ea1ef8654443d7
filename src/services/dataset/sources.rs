//! Dataset sources
//!
//! The only asynchronous boundary of the engine: raw dataset text is fetched
//! from a static asset (HTTP) or a local file, then handed to the parser.

use reqwest::Client as HttpClient;

use super::parser::decode_dataset;
use crate::{
    error::{AppError, AppResult},
    models::DatasetOrigin,
};

/// Trait for anything that can produce raw dataset text
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the full text of the dataset
    async fn fetch_text(&self) -> AppResult<String>;

    /// Origin recorded on a dataset loaded from this source
    fn origin(&self) -> DatasetOrigin;
}

/// Fetches a static CSV asset over HTTP
#[derive(Clone)]
pub struct HttpDatasetSource {
    http_client: HttpClient,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch_text(&self) -> AppResult<String> {
        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalApi(format!(
                "Dataset asset {} returned status {}",
                self.url, status
            )));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url = %self.url, bytes = bytes.len(), "Dataset asset fetched");
        Ok(decode_dataset(&bytes))
    }

    fn origin(&self) -> DatasetOrigin {
        DatasetOrigin::Asset {
            location: self.url.clone(),
        }
    }
}

/// Reads a CSV file from the local filesystem
#[derive(Clone)]
pub struct FileDatasetSource {
    path: String,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch_text(&self) -> AppResult<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.path, bytes = bytes.len(), "Dataset file read");
        Ok(decode_dataset(&bytes))
    }

    fn origin(&self) -> DatasetOrigin {
        DatasetOrigin::Asset {
            location: self.path.clone(),
        }
    }
}
