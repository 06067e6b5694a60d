//! TOML file configuration structures.
//!
//! These structs directly map to the `wpay-config.toml` file format.

use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub client: ClientSection,
}

/// Store API client section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    /// Store API key issued by Wallet Pay.
    #[serde(default)]
    pub api_key: String,
    /// Root URL of the store API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Order TTL applied when `create-order` is not given one.
    #[serde(default)]
    pub default_timeout_seconds: Option<u32>,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            default_timeout_seconds: None,
        }
    }
}

fn default_base_url() -> String {
    wpay_sdk::config::DEFAULT_BASE_URL.to_string()
}
