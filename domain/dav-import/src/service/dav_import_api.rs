use async_trait::async_trait;

/// The backend's dav import endpoint.
#[async_trait]
pub trait DavImportApi: Send + Sync {
    /// Ask the backend to import an already uploaded file into `target`.
    async fn import_from_file(&self, file_id: &str, target: &str) -> anyhow::Result<()>;
}
