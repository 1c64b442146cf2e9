//! Shared HTTP plumbing for provider adapters.

use pillpal_application::ports::llm_gateway::GatewayError;
use pillpal_domain::util::truncate_str;
use std::time::Duration;

/// Maximum bytes of an error body carried into a [`GatewayError`].
const MAX_ERROR_BODY: usize = 500;

/// Build the shared HTTP client.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pillpal/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))
}

/// Map a transport-level failure.
pub fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// Map a non-success HTTP status and its body.
pub fn map_status_error(status: u16, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status, truncate_str(body.trim(), MAX_ERROR_BODY));
    match status {
        401 | 403 => GatewayError::Authentication(detail),
        404 => GatewayError::ModelNotAvailable(detail),
        408 | 504 => GatewayError::Timeout,
        429 => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

/// Send a JSON request and decode a JSON response, mapping every failure.
pub async fn send_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request.send().await.map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_status_error(status.as_u16(), &body));
    }

    let body = response.text().await.map_err(map_transport_error)?;
    serde_json::from_str(&body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Resolve an API key: direct value first, then the named env var.
pub fn resolve_api_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    let non_blank = |key: &String| !key.trim().is_empty();
    direct
        .map(str::to_string)
        .filter(non_blank)
        .or_else(|| std::env::var(env_var).ok().filter(non_blank))
}
