use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use domain_dav_import::{
    exception::ApiException, model::vo::UploadFile, service::FileUploadService,
};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::http::{ensure_success, join_url};

const FILES_PATH: &str = "/api/files";

/// Adapts an async closure into a [`FileUploadService`].
pub struct FnFileUploadService<F>(F);

impl<F, Fut> FnFileUploadService<F>
where
    F: Fn(UploadFile) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    pub fn new(upload: F) -> Self {
        Self(upload)
    }
}

#[async_trait]
impl<F, Fut> FileUploadService for FnFileUploadService<F>
where
    F: Fn(UploadFile) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    async fn upload_file(&self, file: UploadFile) -> anyhow::Result<String> {
        (self.0)(file).await
    }
}

#[derive(Deserialize)]
struct UploadedFile {
    #[serde(rename = "_id", default)]
    id: String,
}

/// Uploads files through the ESN files api.
#[derive(TypedBuilder)]
pub struct EsnFileUploadServiceImpl {
    http_client: Arc<reqwest::Client>,
    /// Server root, the files api lives under `/api/files`.
    #[builder(setter(into))]
    base_url: String,
}

#[async_trait]
impl FileUploadService for EsnFileUploadServiceImpl {
    #[tracing::instrument(skip_all, fields(name = %file.name, size = file.size()))]
    async fn upload_file(&self, file: UploadFile) -> anyhow::Result<String> {
        let url = join_url(&self.base_url, FILES_PATH);
        let size = file.size().to_string();
        tracing::debug!("POST {url}");
        let response = self
            .http_client
            .post(&url)
            .query(&[
                ("name", file.name.as_str()),
                ("mimetype", file.mime_type.as_str()),
                ("size", size.as_str()),
            ])
            .header(CONTENT_TYPE, file.mime_type.as_str())
            .body(file.content)
            .send()
            .await?;
        let uploaded: UploadedFile = ensure_success("POST", response).await?.json().await?;
        if uploaded.id.is_empty() {
            return Err(ApiException::MissingFileId { name: file.name }.into());
        }
        Ok(uploaded.id)
    }
}
