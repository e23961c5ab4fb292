use async_trait::async_trait;

/// Http client bound to one backend api base url.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Post a json body to `path`, resolved against the client's base url.
    async fn post(&self, path: &str, body: serde_json::Value) -> anyhow::Result<()>;
}
