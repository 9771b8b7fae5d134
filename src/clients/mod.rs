//! HTTP clients for the catnip server and the public cat-fact API, plus the
//! local login session the CLI keeps between runs.

pub mod catfact;
pub mod catnip;
pub mod session;

pub use catfact::{CatFactClient, InternetFact, InternetFactsPage};
pub use catnip::CatnipClient;
pub use session::{Session, SessionStore};

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Build a shared HTTP client with reasonable defaults for API calls.
pub fn build_http_client(timeout_seconds: u64) -> Result<reqwest::Client, ClientError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("catnip/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Passes successful responses through and turns the rest into
/// [`ClientError`], preferring the server's `{message}` body.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<crate::api::MessageResponse>(&body)
        .map(|m| m.message)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    if status == reqwest::StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorized(message))
    } else {
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Parses `raw` and makes sure the path ends in `/` so relative joins
/// append instead of replacing the last segment.
fn base_url(raw: &str) -> Result<url::Url, ClientError> {
    let mut url = url::Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
