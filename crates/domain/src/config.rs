//! Client configuration structures
//!
//! Plain data; loading from the environment or files lives in the client
//! crate's `config::loader`.

use serde::{Deserialize, Serialize};

/// Configuration for the API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://api.localmart.app")
    pub base_url: String,
    /// Request timeout in seconds, applied uniformly to every request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional user agent sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.localmart.app".to_string(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}
