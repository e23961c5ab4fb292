use std::sync::Arc;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::config::HttpClientConfig;

/// Shared client carrying the configured user agent and headers on every request.
pub fn new(config: &HttpClientConfig) -> anyhow::Result<Arc<Client>> {
    let client = Client::builder()
        .user_agent(config.user_agent())
        .default_headers(default_headers(config)?)
        .build()
        .context("Failed to build http client")?;
    Ok(Arc::new(client))
}

fn default_headers(config: &HttpClientConfig) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in config.http_header() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid http header name: {name}"))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for http header: {name}"))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
