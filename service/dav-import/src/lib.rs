mod api;
mod client;
mod esn_api_client;
mod http;
mod upload;

/// Namespace the dav import plugin mounts its api under on the backend.
pub const DAV_IMPORT_API_NAMESPACE: &str = "linagora.esn.dav.import";

#[rustfmt::skip]
pub use {
    api::DavImportApiImpl,
    client::{api_base_url, DavImportClientImpl, DavImportClientOptions},
    esn_api_client::EsnApiClientImpl,
    upload::{EsnFileUploadServiceImpl, FnFileUploadService},
};
