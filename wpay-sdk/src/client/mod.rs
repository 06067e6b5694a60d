//! HTTP client for the Wallet Pay store API.
//!
//! Gated behind the `client` cargo feature so crates that only verify
//! webhooks do not pull in `reqwest`.

mod store;
mod webhook;

pub use store::{API_KEY_HEADER, WalletPayClient};
pub use webhook::verify_webhook;

use reqwest::StatusCode;

use crate::objects::ApiRejection;
use crate::signature::SignatureError;

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No API key is configured. Raised before any network I/O.
    #[error("api key is not defined")]
    MissingApiKey,

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The response was well-formed but reported a non-success status.
    #[error(transparent)]
    Rejected(#[from] ApiRejection),
}

impl From<SignatureError> for ClientError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::MissingSecret => Self::MissingApiKey,
        }
    }
}

impl ClientError {
    /// Whether this is the misconfiguration error rather than a transport
    /// or response failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ClientError::MissingApiKey)
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "Wallet Pay returned an error status");
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
