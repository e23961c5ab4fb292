use async_trait::async_trait;

use crate::model::vo::UploadFile;

/// Uploads a file to the file server.
#[async_trait]
pub trait FileUploadService: Send + Sync {
    /// Upload `file` and return the id the server assigned to it.
    async fn upload_file(&self, file: UploadFile) -> anyhow::Result<String>;
}
