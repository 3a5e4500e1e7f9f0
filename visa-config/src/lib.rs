pub mod config;
pub mod http;
pub mod settings;

pub use config::{AppConfig, ConfigError, Configurable};
pub use settings::{
    API_KEY_ENV, CACHE_PATH_ENV, CacheSettings, LoggingSettings, ProviderSettings,
    ServerSettings, Settings,
};

pub use reqwest;
