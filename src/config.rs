use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use unsplash_api::ApiConfig;

/// Application configuration, read from an optional TOML file.
///
/// Missing file or unparseable content falls back to defaults so the app
/// always starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Upstream photo API connection settings
    pub api: ApiConfig,
    /// Page size of the local favorites feed
    pub favorites_per_page: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            favorites_per_page: 10,
        }
    }
}

/// Path of the config file, next to the database directory
pub fn get_config_path() -> PathBuf {
    PathBuf::from("./data/desplash.toml")
}

impl AppConfig {
    /// Load the config file, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = get_config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            favorites_per_page = 25

            [api]
            per_page = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.favorites_per_page, 25);
        assert_eq!(config.api.per_page, 30);
        // Unspecified fields keep their defaults
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
        assert_eq!(config.api.timeout_secs, ApiConfig::default().timeout_secs);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
