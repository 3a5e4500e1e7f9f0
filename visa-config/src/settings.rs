//! Typed application settings.
//!
//! Every section is optional in the TOML document and falls back to the
//! defaults below. The provider API key is normally supplied through the
//! `RAPIDAPI_KEY` environment variable rather than the file.
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

use crate::config::{ConfigError, Configurable};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";
/// Environment variable overriding the cache directory.
pub const CACHE_PATH_ENV: &str = "VISA_CACHE_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Alpha-2 code of the passport every lookup is made for
    pub home_passport: String,
    /// Destinations never listed or clickable, regardless of status
    pub excluded_destinations: Vec<String>,
    pub default_locale: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            home_passport: "SA".to_string(),
            excluded_destinations: vec!["IL".to_string()],
            default_locale: "ar".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub host_header: String,
    pub check_path: String,
    pub map_path: String,
    /// Whole-request timeout in seconds
    pub timeout: u64,
    pub connect_timeout: u64,
    pub user_agent: String,
    pub api_key: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://visa-requirement.p.rapidapi.com".to_string(),
            host_header: "visa-requirement.p.rapidapi.com".to_string(),
            check_path: "/v2/visa/check".to_string(),
            map_path: "/v2/visa/map".to_string(),
            timeout: 10,
            connect_timeout: 5,
            user_agent: concat!("visa-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            api_key: None,
        }
    }
}

impl ProviderSettings {
    /// API key if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub path: PathBuf,
    pub check_ttl_secs: u64,
    pub map_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/visa-cache"),
            check_ttl_secs: 24 * 60 * 60,
            map_ttl_secs: 7 * 24 * 60 * 60,
        }
    }
}

impl CacheSettings {
    pub fn check_ttl(&self) -> Duration {
        Duration::from_secs(self.check_ttl_secs)
    }

    pub fn map_ttl(&self) -> Duration {
        Duration::from_secs(self.map_ttl_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub cache: CacheSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn from_config(config: &impl Configurable) -> Result<Self, ConfigError> {
        let settings = Self {
            server: config.section("server")?,
            provider: config.section("provider")?,
            cache: config.section("cache")?,
            logging: config.section("logging")?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Apply overrides looked up through `var`, normally `std::env::var`.
    pub fn apply_env_with<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
        if let Some(path) = var(CACHE_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            self.cache.path = PathBuf::from(path);
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let passport = self.server.home_passport.trim();
        if passport.len() != 2 || !passport.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid(format!(
                "server.home_passport must be an alpha-2 code, got {passport:?}"
            )));
        }
        if self.provider.timeout == 0 {
            return Err(ConfigError::Invalid(
                "provider.timeout must be positive".to_string(),
            ));
        }
        if self.cache.check_ttl_secs == 0 || self.cache.map_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache TTLs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
