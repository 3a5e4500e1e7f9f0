use serde::de::DeserializeOwned;
use std::{fs, path};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub trait Configurable {
    fn config(&self) -> &toml::Value;

    // read configuration from toml config
    fn load_config(
        config_file_path: impl AsRef<path::Path>,
    ) -> Result<toml::Value, ConfigError> {
        let content: String = fs::read_to_string(config_file_path)?;
        let config: toml::Value = toml::from_str(&content)?;
        Ok(config)
    }

    /// Extract Value from config using dot notation i.e. "provider.timeout"
    fn get_config_value(&self, key: &str) -> Option<&toml::Value> {
        let keys: Vec<&str> = key.split('.').collect();
        Self::get_value_recursive(self.config(), &keys)
    }

    /// Deserialize the table at `key`, or the type's default when the table
    /// is absent.
    fn section<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        match self.get_config_value(key) {
            Some(value) => Ok(value.clone().try_into()?),
            None => Ok(T::default()),
        }
    }

    fn get_value_recursive<'a>(
        config: &'a toml::Value,
        keys: &[&str],
    ) -> Option<&'a toml::Value> {
        let (key, remaining_keys) = keys.split_first()?;
        if key.is_empty() {
            return None;
        }

        let value = config.as_table()?.get(*key)?;
        if remaining_keys.is_empty() {
            Some(value)
        } else {
            Self::get_value_recursive(value, remaining_keys)
        }
    }
}

/// Raw TOML configuration document.
#[derive(Debug, Clone)]
pub struct AppConfig {
    config: toml::Value,
}

impl Configurable for AppConfig {
    fn config(&self) -> &toml::Value {
        &self.config
    }
}

impl AppConfig {
    pub fn from_file(
        config_file_path: impl AsRef<path::Path>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Self::load_config(config_file_path)?,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            config: toml::from_str(content)?,
        })
    }

    /// Empty document, every section takes its defaults.
    pub fn empty() -> Self {
        Self {
            config: toml::Value::Table(toml::map::Map::new()),
        }
    }
}
