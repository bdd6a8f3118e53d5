//! Suite configuration
//!
//! Built once at startup (defaults, then an optional TOML file, then
//! environment overrides) and passed by reference to whatever needs it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Top-level configuration for a test run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Target URLs
    pub urls: UrlConfig,

    /// HTTP client settings
    pub http: HttpConfig,

    /// Booking API credentials
    pub auth: AuthConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Base URLs of the systems under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Storefront site
    pub site: String,

    /// Storefront product/user API
    pub api: String,

    /// Hotel booking API
    pub booking_api: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            site: "https://automationexercise.com".to_string(),
            api: "https://automationexercise.com/api".to_string(),
            booking_api: "https://restful-booker.herokuapp.com".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: 30_000 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

/// Booking API admin credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit debug-level logs
    pub debug: bool,
}

impl SuiteConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            debug!("Loaded configuration from {}", path.display());
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay values from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BASE_URL") {
            self.urls.site = url;
        }
        if let Some(url) = lookup("BACKEND_API_BASE_URL") {
            self.urls.api = url;
        }
        if let Some(url) = lookup("RESTFUL_BOOKER_BASE_URL") {
            self.urls.booking_api = url;
        }
        if let Some(timeout) = lookup("TIMEOUT") {
            self.http.timeout_ms = timeout.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("TIMEOUT must be milliseconds, got '{}'", timeout))
            })?;
        }
        if let Some(flag) = lookup("DEBUG_LOGGING") {
            self.logging.debug = flag == "true";
        }
        self.validate()?;
        Ok(self)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (field, url) in [
            ("urls.site", &self.urls.site),
            ("urls.api", &self.urls.api),
            ("urls.booking_api", &self.urls.booking_api),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be an http(s) URL, got '{}'",
                    field, url
                )));
            }
        }
        if self.http.timeout_ms == 0 {
            return Err(Error::InvalidConfig("http.timeout_ms must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.urls.booking_api, "https://restful-booker.herokuapp.com");
        assert_eq!(config.http.timeout_ms, 30_000);
        assert_eq!(config.auth.username, "admin");
        assert!(!config.logging.debug);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SuiteConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.toml");
        std::fs::write(
            &path,
            "[urls]\nbooking_api = \"http://127.0.0.1:3001\"\n\n[http]\ntimeout_ms = 500\n",
        )
        .unwrap();

        let config = SuiteConfig::load(&path).unwrap();
        assert_eq!(config.urls.booking_api, "http://127.0.0.1:3001");
        assert_eq!(config.urls.site, "https://automationexercise.com");
        assert_eq!(config.http.timeout_ms, 500);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("suite.toml");
        let mut config = SuiteConfig::default();
        config.logging.debug = true;
        config.save(&path).unwrap();

        assert_eq!(SuiteConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RESTFUL_BOOKER_BASE_URL", "http://localhost:3001"),
            ("TIMEOUT", "1500"),
            ("DEBUG_LOGGING", "true"),
        ]
        .into_iter()
        .collect();

        let config = SuiteConfig::default()
            .apply_vars(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.urls.booking_api, "http://localhost:3001");
        assert_eq!(config.http.timeout_ms, 1500);
        assert!(config.logging.debug);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let result = SuiteConfig::default()
            .apply_vars(|k| (k == "TIMEOUT").then(|| "soon".to_string()));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_non_http_url_rejected() {
        let result = SuiteConfig::default()
            .apply_vars(|k| (k == "BASE_URL").then(|| "ftp://example.com".to_string()));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
