use async_trait::async_trait;

use crate::model::vo::UploadFile;

/// Upload a file, then import it into a dav location.
#[async_trait]
pub trait DavImportService: Send + Sync {
    /// Upload `file` and import the uploaded file into `target`.
    ///
    /// The import is only requested once the upload succeeded. Errors of either
    /// step are returned untouched.
    async fn import_from_file(&self, file: UploadFile, target: &str) -> anyhow::Result<()>;
}
