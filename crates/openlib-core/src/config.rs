//! Client configuration
//!
//! Hosts, user agent, and timeout for talking to Open Library. Every
//! field has a default, so a TOML file only needs the keys it overrides:
//!
//! ```toml
//! user_agent = "my-app/0.3 (ops@example.org)"
//! timeout_secs = 10
//!
//! [endpoints]
//! primary_host = "openlibrary.org"
//! image_host = "covers.openlibrary.org"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Hosts requests are routed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub scheme: String,
    /// JSON API host
    pub primary_host: String,
    /// Cover and author photo host
    pub image_host: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            primary_host: "openlibrary.org".to_string(),
            image_host: "covers.openlibrary.org".to_string(),
        }
    }
}

/// Client-wide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Sent as the `User-Agent` header
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            user_agent: concat!("openlib/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from TOML text, filling gaps with defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
