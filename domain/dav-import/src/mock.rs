use async_trait::async_trait;
use mockall::mock;

use crate::{
    model::vo::UploadFile,
    service::{ApiClient, DavImportApi, FileUploadService},
};

mock! {
    pub ApiClient {}
    #[async_trait]
    impl ApiClient for ApiClient {
        async fn post(&self, path: &str, body: serde_json::Value) -> anyhow::Result<()>;
    }
}

mock! {
    pub FileUploadService {}
    #[async_trait]
    impl FileUploadService for FileUploadService {
        async fn upload_file(&self, file: UploadFile) -> anyhow::Result<String>;
    }
}

mock! {
    pub DavImportApi {}
    #[async_trait]
    impl DavImportApi for DavImportApi {
        async fn import_from_file(&self, file_id: &str, target: &str) -> anyhow::Result<()>;
    }
}
