use std::path::Path;

use anyhow::Context;
use domain_dav_import::model::vo::UploadFile;

/// Read a local file into an [`UploadFile`], guessing its mime type from the extension.
pub async fn load_upload_file(path: &Path) -> anyhow::Result<UploadFile> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(UploadFile::new(name, mime_type.essence_str(), content))
}
