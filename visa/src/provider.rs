//! Client for the third-party visa-rules API.
//!
//! Two calls are made, both authenticated with the RapidAPI key header:
//! a JSON `check` for one passport/destination pair and a form-encoded
//! `map` returning color buckets for every destination. Calls are bounded
//! by the client timeout and never retried.
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};
use url::Url;
use visa_config::{
    ProviderSettings,
    http::{HttpClientParams, build_http_client},
};

use crate::model::{VisaCheckResponse, VisaMapResponse};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Visa provider API key is not configured")]
    NotConfigured,
    #[error("Visa provider returned HTTP {status}")]
    Upstream { status: u16 },
    #[error("Visa provider request timed out")]
    Timeout,
    #[error("Visa provider transport error: {0}")]
    Transport(String),
    #[error("Failed to decode visa provider response: {0}")]
    Decode(String),
    #[error("Invalid provider setup: {0}")]
    Setup(String),
}

impl ProviderError {
    /// Operator problems, as opposed to upstream failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ProviderError::NotConfigured | ProviderError::Setup(_))
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait VisaRulesProvider: Send + Sync {
    /// Detailed rules for one route.
    async fn fetch_check(
        &self,
        passport: &str,
        destination: &str,
    ) -> Result<VisaCheckResponse, ProviderError>;

    /// Color buckets for every destination reachable with `passport`.
    async fn fetch_map(&self, passport: &str) -> Result<VisaMapResponse, ProviderError>;
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    passport: &'a str,
    destination: &'a str,
}

#[derive(Debug, Clone)]
pub struct RapidApiClient {
    client: Client,
    check_url: Url,
    map_url: Url,
    host_header: String,
    api_key: Option<String>,
}

impl RapidApiClient {
    /// Build with a client made from the provider settings.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let client = build_http_client(HttpClientParams::from_settings(settings))
            .map_err(|e| ProviderError::Setup(e.to_string()))?;
        Self::new(client, settings)
    }

    pub fn new(client: Client, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|e| ProviderError::Setup(format!("base_url: {e}")))?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| ProviderError::Setup(format!("{path}: {e}")))
        };

        Ok(Self {
            check_url: join(&settings.check_path)?,
            map_url: join(&settings.map_path)?,
            client,
            host_header: settings.host_header.clone(),
            api_key: settings.api_key().map(str::to_string),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        let key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        let response = request
            .header(API_KEY_HEADER, key)
            .header(API_HOST_HEADER, &self.host_header)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Visa provider rejected request");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(ProviderError::from_reqwest)
    }
}

#[async_trait]
impl VisaRulesProvider for RapidApiClient {
    async fn fetch_check(
        &self,
        passport: &str,
        destination: &str,
    ) -> Result<VisaCheckResponse, ProviderError> {
        let passport = passport.trim().to_ascii_uppercase();
        let destination = destination.trim().to_ascii_uppercase();
        info!(%passport, %destination, "Fetching visa check from provider");

        let request = self.client.post(self.check_url.clone()).json(&CheckRequest {
            passport: &passport,
            destination: &destination,
        });
        let check = self.send(request).await?;
        debug!(%passport, %destination, "Visa check received");
        Ok(check)
    }

    async fn fetch_map(&self, passport: &str) -> Result<VisaMapResponse, ProviderError> {
        let passport = passport.trim().to_ascii_uppercase();
        info!(%passport, "Fetching visa map from provider");

        let request = self
            .client
            .post(self.map_url.clone())
            .form(&[("passport", passport.as_str())]);
        let map: VisaMapResponse = self.send(request).await?;
        debug!(%passport, colors = map.data.colors.len(), "Visa map received");
        Ok(map)
    }
}
