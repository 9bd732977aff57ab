//! Application configuration
//!
//! Every value has a default that reproduces the fixed API and payload
//! constants, so the application runs without any file present. A TOML file
//! may override any subset of keys, and `CATDESK_API_BASE_URL` overrides the
//! base URL last.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CATDESK_CONFIG";

/// Environment variable overriding `api.base_url`
pub const BASE_URL_ENV: &str = "CATDESK_API_BASE_URL";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "category-desk.toml";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Category id sent with every create/edit payload
pub const PLACEHOLDER_CATEGORY_ID: u32 = 6;

/// Image URL sent with every create/edit payload
pub const PLACEHOLDER_IMAGE_URL: &str = "https://api.lorem.space/image/fashion?w=640&h=480&r=4278";

// ============================================================================
// Sections
// ============================================================================

/// `[api]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root; the collection endpoint is `<base_url>/categories`
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// `[payload]` section: fixed values sent with every create/edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadDefaults {
    pub category_id: u32,
    pub image_url: String,
}

impl Default for PayloadDefaults {
    fn default() -> Self {
        Self {
            category_id: PLACEHOLDER_CATEGORY_ID,
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

/// `[alerts]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// How long a notification stays visible
    pub ttl_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { ttl_ms: 3000 }
    }
}

/// `[window]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Category Desk".to_string(),
            width: 1100.0,
            height: 760.0,
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub payload: PayloadDefaults,
    pub alerts: AlertConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and filesystem.
    ///
    /// Resolution order: `CATDESK_CONFIG` file, else `category-desk.toml` in
    /// the working directory if it exists, else defaults. The base URL
    /// override is applied afterwards and the result is validated.
    pub fn load() -> CoreResult<Self> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            }
        };

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            tracing::debug!("Overriding API base URL from {}", BASE_URL_ENV);
            self.api.base_url = base_url;
        }
    }

    /// Check values and normalize the base URL (trailing `/` removed)
    pub fn validate(&mut self) -> CoreResult<()> {
        let base_url = self.api.base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(CoreError::config("api.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        if self.alerts.ttl_ms == 0 {
            return Err(CoreError::config("alerts.ttl_ms must be greater than zero"));
        }

        self.api.base_url = base_url;
        Ok(())
    }

    /// Collection endpoint URL
    pub fn collection_url(&self) -> String {
        format!("{}/categories", self.api.base_url)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.request_timeout_secs, None);
        assert_eq!(config.payload.category_id, 6);
        assert_eq!(config.payload.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.alerts.ttl_ms, 3000);
        assert_eq!(
            config.collection_url(),
            "https://api.escuelajs.co/api/v1/categories"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:3000/api/v1"

            [alerts]
            ttl_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.alerts.ttl_ms, 500);
        assert_eq!(config.payload, PayloadDefaults::default());
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_env_override() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == BASE_URL_ENV).then(|| "http://127.0.0.1:9000/".to_string())
        });
        config.validate().unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.collection_url(), "http://127.0.0.1:9000/categories");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().unwrap_err().is_config());

        let mut config = AppConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.alerts.ttl_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/category-desk.toml")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }
}
