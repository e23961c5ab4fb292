use domain_dav_import::exception::ApiException;
use reqwest::Response;

/// Join a base url and a relative path with exactly one slash.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Pass 2xx responses through, turn anything else into [`ApiException::UnexpectedStatus`].
pub(crate) async fn ensure_success(method: &str, response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = error_body(method, &url, response.text().await);
    tracing::warn!("{method} {url} responded with status {status}");
    Err(ApiException::UnexpectedStatus {
        method: method.to_string(),
        url,
        status: status.as_u16(),
        body,
    }
    .into())
}

/// Body of an error response, or the reason it could not be read.
fn error_body(method: &str, url: &str, body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Failed to read error response body of {method} {url}: {e}");
            format!("<unreadable body: {e}>")
        }
    }
}
