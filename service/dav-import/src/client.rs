use std::sync::Arc;

use async_trait::async_trait;
use domain_dav_import::{
    exception::{ConstructionException, ConstructionResult},
    model::vo::UploadFile,
    service::{ApiClient, DavImportApi, DavImportService, FileUploadService},
};
use typed_builder::TypedBuilder;
use url::Url;

use crate::{DavImportApiImpl, EsnApiClientImpl, DAV_IMPORT_API_NAMESPACE};

/// Parts a [`DavImportClientImpl`] is built from.
///
/// Both fields are optional here so that missing ones are reported by
/// [`DavImportClientImpl::new`] instead of at compile time.
#[derive(TypedBuilder, Default)]
pub struct DavImportClientOptions {
    #[builder(default, setter(strip_option))]
    api_client: Option<Arc<dyn ApiClient>>,
    #[builder(default, setter(strip_option))]
    upload_file: Option<Arc<dyn FileUploadService>>,
}

/// Uploads a file and then asks the backend to import it into a dav location.
pub struct DavImportClientImpl {
    upload_file: Arc<dyn FileUploadService>,
    dav_import_api: Arc<dyn DavImportApi>,
}

#[async_trait]
impl DavImportService for DavImportClientImpl {
    async fn import_from_file(&self, file: UploadFile, target: &str) -> anyhow::Result<()> {
        let file_id = self.upload_file.upload_file(file).await?;
        self.dav_import_api.import_from_file(&file_id, target).await
    }
}

impl DavImportClientImpl {
    /// Build a client on top of an existing backend api client.
    pub fn new(options: DavImportClientOptions) -> ConstructionResult<Self> {
        let api_client = options.api_client.ok_or(ConstructionException::MissingApiClient)?;
        let upload_file = options.upload_file.ok_or(ConstructionException::MissingUploadFile)?;
        Ok(Self::from_parts(
            upload_file,
            Arc::new(DavImportApiImpl::new(api_client)),
        ))
    }

    /// Build a client whose api client targets the dav import plugin of the
    /// backend served at `base_url`.
    pub fn from_base_url(
        upload_file: Option<Arc<dyn FileUploadService>>,
        base_url: &str,
        http_client: Arc<reqwest::Client>,
    ) -> ConstructionResult<Self> {
        let upload_file = upload_file.ok_or(ConstructionException::MissingUploadFile)?;
        let api_client = EsnApiClientImpl::new(http_client, api_base_url(base_url)?);
        Self::new(
            DavImportClientOptions::builder()
                .api_client(Arc::new(api_client))
                .upload_file(upload_file)
                .build(),
        )
    }

    /// Wire an upload capability and an import api directly.
    #[inline]
    pub fn from_parts(
        upload_file: Arc<dyn FileUploadService>,
        dav_import_api: Arc<dyn DavImportApi>,
    ) -> Self {
        Self {
            upload_file,
            dav_import_api,
        }
    }
}

/// Api root of the dav import plugin on the backend served at `base_url`.
pub fn api_base_url(base_url: &str) -> ConstructionResult<String> {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return Err(ConstructionException::MissingBaseUrl);
    }
    let invalid = |reason: String| ConstructionException::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };
    let mut url =
        Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .push(DAV_IMPORT_API_NAMESPACE)
        .push("api");
    Ok(url.into())
}
