pub mod environmental;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Errors surfaced by the HTTP client. All of them are reported to the user
/// through the error banner and logged; none abort the application.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, DNS).
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status. The body is not inspected.
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// The response body was not valid JSON for the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let err = ApiError::Request(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        let err = ApiError::Http {
            status: response.status(),
        };
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let err = ApiError::Parse(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
