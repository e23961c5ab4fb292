use std::sync::Arc;

use async_trait::async_trait;
use domain_dav_import::{
    command::ImportFromFileCommand,
    service::{ApiClient, DavImportApi},
};

const IMPORT_PATH: &str = "/import";

/// Dav import endpoint reached through an [`ApiClient`] bound to the plugin's api root.
pub struct DavImportApiImpl {
    api_client: Arc<dyn ApiClient>,
}

#[async_trait]
impl DavImportApi for DavImportApiImpl {
    async fn import_from_file(&self, file_id: &str, target: &str) -> anyhow::Result<()> {
        let command = ImportFromFileCommand {
            file_id: file_id.to_owned(),
            target: target.to_owned(),
        };
        self.api_client.post(IMPORT_PATH, serde_json::to_value(command)?).await
    }
}

impl DavImportApiImpl {
    #[inline]
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        Self { api_client }
    }
}
