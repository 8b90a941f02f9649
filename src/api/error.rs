use std::sync::Arc;

use thiserror::Error;

/// Errors produced by the catalog client.
///
/// Transport failures, non-2xx statuses and undecodable bodies all collapse
/// into `FetchFailed`. The source is behind an `Arc` so the error can ride
/// inside a `Message`, which must be `Clone`.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    FetchFailed(#[source] Arc<reqwest::Error>),
    #[error("image fetch failed for `{url}`: {source}")]
    ImageFailed {
        url: String,
        #[source]
        source: Arc<reqwest::Error>,
    },
}

impl CatalogError {
    pub fn fetch(err: reqwest::Error) -> Self {
        Self::FetchFailed(Arc::new(err))
    }

    pub fn image(url: &str, err: reqwest::Error) -> Self {
        Self::ImageFailed {
            url: url.to_string(),
            source: Arc::new(err),
        }
    }
}
