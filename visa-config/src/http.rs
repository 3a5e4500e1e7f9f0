//! HTTP client construction for outbound provider calls.
//!
//! Every client built here carries both a connect timeout and a
//! whole-request timeout.
//!
//! # Example
//! ```no_run
//! use visa_config::{AppConfig, Settings};
//! use visa_config::http::{HttpClientParams, build_http_client};
//!
//! let config = AppConfig::parse(r#"
//! [provider]
//! timeout = 10
//! connect_timeout = 5
//! "#).unwrap();
//!
//! let settings = Settings::from_config(&config).unwrap();
//! let params = HttpClientParams::from_settings(&settings.provider);
//! let client = build_http_client(params).unwrap();
//! ```
use std::time::Duration;

use crate::settings::ProviderSettings;

/// Parameters for configuring an HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientParams<'a> {
    pub timeout: u64,
    pub connect_timeout: u64,
    pub user_agent: &'a str,
}

impl<'a> HttpClientParams<'a> {
    pub fn from_settings(provider: &'a ProviderSettings) -> Self {
        Self {
            timeout: provider.timeout,
            connect_timeout: provider.connect_timeout,
            user_agent: &provider.user_agent,
        }
    }
}

/// Builds an HTTP client with the specified parameters.
///
/// Creates a reqwest::Client configured with rustls, gzip, both timeouts and
/// the user agent.
pub fn build_http_client(
    params: HttpClientParams,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .use_rustls_tls()
        .gzip(true)
        .timeout(Duration::from_secs(params.timeout))
        .connect_timeout(Duration::from_secs(params.connect_timeout))
        .user_agent(params.user_agent)
        .build()
}
