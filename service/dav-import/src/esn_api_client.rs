use std::sync::Arc;

use async_trait::async_trait;
use domain_dav_import::service::ApiClient;

use crate::http::{ensure_success, join_url};

/// [`ApiClient`] talking to an ESN backend over http.
pub struct EsnApiClientImpl {
    http_client: Arc<reqwest::Client>,
    base_url: String,
}

#[async_trait]
impl ApiClient for EsnApiClientImpl {
    #[tracing::instrument(skip(self, body))]
    async fn post(&self, path: &str, body: serde_json::Value) -> anyhow::Result<()> {
        let url = join_url(&self.base_url, path);
        tracing::debug!("POST {url}");
        let response = self.http_client.post(&url).json(&body).send().await?;
        ensure_success("POST", response).await?;
        Ok(())
    }
}

impl EsnApiClientImpl {
    pub fn new(http_client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }
}
