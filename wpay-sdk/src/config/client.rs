//! Store API client configuration.

use url::Url;

/// Production endpoint of the Wallet Pay store API.
pub const DEFAULT_BASE_URL: &str = "https://pay.wallet.tg/";

/// Order TTL used when neither the request nor the config sets one (3 hours).
pub const DEFAULT_ORDER_TIMEOUT_SECONDS: u32 = 60 * 60 * 3;

/// Configuration captured once when a client is built.
#[derive(Clone)]
pub struct ClientConfig {
    /// Store API key. Sent with every request and used as the webhook HMAC key.
    pub api_key: String,
    /// Root URL of the store API.
    pub base_url: Url,
    /// Order TTL applied to orders created without an explicit timeout.
    pub default_timeout_seconds: Option<u32>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("default_timeout_seconds", &self.default_timeout_seconds)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            default_timeout_seconds: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_default_timeout(mut self, seconds: u32) -> Self {
        self.default_timeout_seconds = Some(seconds);
        self
    }

    /// Whether an API key has been provided.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default base url")
}
