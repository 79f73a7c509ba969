pub mod weather_forecast;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::AbortSignal;

/// Failure of a backend call. Every variant means the load did not produce
/// data; callers are not expected to tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Common GET request handler for endpoints returning a bare JSON body.
///
/// Failures are returned, not logged; the caller owning the load logs them.
pub async fn get<T>(url: &str, signal: Option<&AbortSignal>) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let data: T = response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))?;

    log::info!("GET {} - Success", url);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ClientError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ClientError::Request("network down".to_string()).to_string(),
            "Request failed: network down"
        );
        assert!(ClientError::Parse("expected a sequence".to_string())
            .to_string()
            .starts_with("Failed to parse response"));
    }
}
