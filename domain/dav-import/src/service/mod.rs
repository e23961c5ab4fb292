mod api_client;
mod dav_import;
mod dav_import_api;
mod file_upload;

#[rustfmt::skip]
pub use {
    api_client::ApiClient,
    dav_import::DavImportService,
    dav_import_api::DavImportApi,
    file_upload::FileUploadService,
};
