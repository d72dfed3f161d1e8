//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths, then applies
//! environment overrides (a `.env` file in the working directory is honoured).
//! Config location: ~/.config/geocode-gateway/config.toml

pub mod defaults;

use crate::constants::limit::{MAX_LIMIT, MIN_LIMIT};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding provider settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Default values for requests
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Provider base URL (no trailing slash needed)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout applied to every outbound call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Default values for requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Search result limit when the caller gives none
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl UpstreamConfig {
    /// Outbound call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;

        if let Ok(env_path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", env_path.display());
        }
        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Load configuration from the default path only
    ///
    /// Creates default config if file doesn't exist
    pub fn load_file() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Apply overrides from an environment-like lookup
    ///
    /// Unparseable numeric values are rejected rather than ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pairs = [
            (env::BASE_URL, "upstream.base_url"),
            (env::USER_AGENT, "upstream.user_agent"),
            (env::TIMEOUT_SECS, "upstream.timeout_secs"),
            (env::DEFAULT_LIMIT, "defaults.limit"),
            (env::HOST, "server.host"),
            (env::PORT, "server.port"),
        ];

        for (var, key) in pairs {
            if let Some(value) = lookup(var) {
                self.set(key, &value)
                    .map_err(|e| Error::Config(format!("{}: {}", var, e)))?;
            }
        }

        Ok(())
    }

    /// Check values that serde cannot constrain
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.defaults.limit)?;
        validate_timeout(self.upstream.timeout_secs)?;
        if self.upstream.base_url.trim().is_empty() {
            return Err(Error::Config("upstream.base_url must not be empty".to_string()));
        }
        if self.upstream.user_agent.trim().is_empty() {
            return Err(Error::Config("upstream.user_agent must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["upstream", "base_url"] => Some(self.upstream.base_url.clone()),
            ["upstream", "user_agent"] => Some(self.upstream.user_agent.clone()),
            ["upstream", "timeout_secs"] => Some(self.upstream.timeout_secs.to_string()),

            ["defaults", "limit"] => Some(self.defaults.limit.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["upstream", "base_url"] => {
                if value.trim().is_empty() {
                    return Err(Error::Config("Base URL must not be empty".to_string()));
                }
                self.upstream.base_url = value.trim_end_matches('/').to_string();
            }
            ["upstream", "user_agent"] => {
                if value.trim().is_empty() {
                    return Err(Error::Config("User-Agent must not be empty".to_string()));
                }
                self.upstream.user_agent = value.to_string();
            }
            ["upstream", "timeout_secs"] => {
                let timeout_secs: u64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
                validate_timeout(timeout_secs)?;
                self.upstream.timeout_secs = timeout_secs;
            }

            ["defaults", "limit"] => {
                let limit: u32 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid limit value: {}", value))
                })?;
                validate_limit(limit)?;
                self.defaults.limit = limit;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "upstream.base_url",
            "upstream.user_agent",
            "upstream.timeout_secs",
            "defaults.limit",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn validate_limit(limit: u32) -> Result<()> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(Error::Config(format!(
            "Limit {} is out of range [{}, {}]",
            limit, MIN_LIMIT, MAX_LIMIT
        )));
    }
    Ok(())
}

/// A zero timeout would fail every outbound call
fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(Error::Config("Timeout must be at least 1 second".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.upstream.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.upstream.user_agent, "GeocodingApp/1.0");
        assert_eq!(config.upstream.timeout(), Duration::from_secs(10));
        assert_eq!(config.defaults.limit, 10);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.limit"), Some("10".to_string()));

        config.set("defaults.limit", "25").unwrap();
        assert_eq!(config.defaults.limit, 25);

        config.set("upstream.base_url", "http://localhost:8080/").unwrap();
        assert_eq!(
            config.get("upstream.base_url"),
            Some("http://localhost:8080".to_string())
        );
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("upstream.timeout_secs", "soon").is_err());
        assert!(config.set("server.port", "99999").is_err());
    }

    #[test]
    fn test_set_limit_out_of_range() {
        let mut config = Config::default();
        assert!(config.set("defaults.limit", "0").is_err());
        assert!(config.set("defaults.limit", "51").is_err());
        assert_eq!(config.defaults.limit, 10);
    }

    #[test]
    fn test_set_zero_timeout() {
        let mut config = Config::default();
        assert!(config.set("upstream.timeout_secs", "0").is_err());
        assert_eq!(config.upstream.timeout_secs, 10);
        config.set("upstream.timeout_secs", "1").unwrap();
        assert_eq!(config.upstream.timeout_secs, 1);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("NOMINATIM_API_BASE_URL", "http://127.0.0.1:9999"),
            ("NOMINATIM_USER_AGENT", "TestAgent/2.0"),
            ("GEOCODE_PORT", "9000"),
        ]);

        config.apply_overrides(lookup).unwrap();

        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.upstream.user_agent, "TestAgent/2.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn test_env_override_invalid_number() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("NOMINATIM_TIMEOUT_SECS", "ten")]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("NOMINATIM_TIMEOUT_SECS"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.upstream.user_agent = "SaveTest/1.0".to_string();
        config.defaults.limit = 5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.upstream.user_agent, "SaveTest/1.0");
        assert_eq!(loaded.defaults.limit, 5);
    }

    #[test]
    fn test_load_rejects_bad_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nlimit = 100\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[upstream]\ntimeout_secs = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Timeout"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 8123);
        assert_eq!(loaded.server.host, "127.0.0.1");
        assert_eq!(loaded.upstream.timeout_secs, 10);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[upstream]"));
        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[server]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_available_keys() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "missing getter for {}", key);
        }
    }
}
