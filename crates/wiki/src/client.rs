use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{Result, WikiError};
use crate::params::Params;

/// One page fetch against a MediaWiki-style API.
///
/// Implemented by [`WikiClient`] for real traffic and by the scripted double
/// in [`crate::testing`] so pagination logic can run without a network.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch<T: DeserializeOwned>(&self, base_url: &str, params: &Params) -> Result<T>;
}

pub struct WikiClient {
    http: reqwest::Client,
    request_count: AtomicU64,
}

impl WikiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            request_count: AtomicU64::new(0),
        }
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for WikiClient {
    async fn fetch<T: DeserializeOwned>(&self, base_url: &str, params: &Params) -> Result<T> {
        let url = Url::parse_with_params(base_url, params.entries())
            .map_err(|e| WikiError::Network(format!("invalid url {base_url}: {e}")))?;

        let request = self.request_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(request, url = %url, "sending request");

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let page: T = response.json().await?;
        Ok(page)
    }
}
