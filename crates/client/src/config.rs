use shared_types::{ClientConfig, ConfigFile};
use std::path::{Path, PathBuf};

use crate::storage::SessionStorage;

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api_base_url`.
pub const ENV_API_URL: &str = "LIBRARY_API_URL";
/// Environment variable overriding `state_dir`.
pub const ENV_STATE_DIR: &str = "LIBRARY_STATE_DIR";

/// Load `config.toml` plus environment overrides (`.env` included).
///
/// A missing or unparseable file falls back to defaults.
pub fn load_config() -> ClientConfig {
    let _ = dotenvy::dotenv();
    let mut config = read_config_file(Path::new(CONFIG_PATH));
    apply_overrides(&mut config, |key| std::env::var(key).ok());
    tracing::info!(api = %config.base_url(), state_dir = %config.state_dir, "Client configuration loaded");
    config
}

/// Parse the `[client]` table of a config file.
pub fn read_config_file(path: &Path) -> ClientConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
            Ok(file) => file.client,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                ClientConfig::default()
            }
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
            ClientConfig::default()
        }
    }
}

/// Apply overrides found through `lookup`. Blank values are ignored.
pub fn apply_overrides(config: &mut ClientConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    if let Some(url) = non_blank(ENV_API_URL) {
        config.api_base_url = url;
    }
    if let Some(dir) = non_blank(ENV_STATE_DIR) {
        config.state_dir = dir;
    }
}

/// File holding the persisted session.
pub fn session_file(config: &ClientConfig) -> PathBuf {
    Path::new(&config.state_dir).join("session.json")
}

/// Where the session persists: browser local storage in the web build,
/// [`session_file`] everywhere else.
#[cfg(feature = "web")]
pub fn session_storage(_config: &ClientConfig) -> Box<dyn SessionStorage> {
    Box::new(crate::storage::LocalStorage)
}

#[cfg(not(feature = "web"))]
pub fn session_storage(config: &ClientConfig) -> Box<dyn SessionStorage> {
    Box::new(crate::storage::FileStorage::new(session_file(config)))
}
