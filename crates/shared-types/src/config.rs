use serde::{Deserialize, Serialize};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Directory holding persisted session state when nothing else is configured.
pub const DEFAULT_STATE_DIR: &str = ".library-client";

/// Settings for the library client.
///
/// Every field has a default so that a missing or partial `[client]`
/// table still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_state_dir() -> String {
    DEFAULT_STATE_DIR.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            state_dir: default_state_dir(),
        }
    }
}

impl ClientConfig {
    /// Base URL with any trailing slashes removed, ready to prefix endpoints.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub client: ClientConfig,
}
