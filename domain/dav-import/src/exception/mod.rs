pub type ConstructionResult<T> = Result<T, ConstructionException>;
pub type ApiResult<T> = Result<T, ApiException>;

/// Raised when a dav import client is built from incomplete or malformed parts.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionException {
    #[error("apiClient is required and must implement ApiClient")]
    MissingApiClient,

    #[error("uploadFile is required and must be a function")]
    MissingUploadFile,

    #[error("baseUrl is required")]
    MissingBaseUrl,

    #[error("baseUrl: {base_url} is not a valid http(s) url: {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("Construction internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ConstructionException {
    fn from(e: anyhow::Error) -> Self {
        ConstructionException::InternalError { source: e }
    }
}

/// Failures reported by the backend http apis.
#[derive(Debug, thiserror::Error)]
pub enum ApiException {
    #[error("{method} {url} responded with status {status}: {body}")]
    UnexpectedStatus {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Upload of file: {name} succeeded but no file id was returned.")]
    MissingFileId { name: String },

    #[error("Api internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ApiException {
    fn from(e: anyhow::Error) -> Self {
        ApiException::InternalError { source: e }
    }
}
