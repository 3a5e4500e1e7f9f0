//! Cache-first access to the visa provider.
//!
//! Every lookup goes cache, then provider, then (for lists) the static
//! fallback. Provider failures never touch the cache; cache failures are
//! logged and treated as misses so a broken store cannot take the API down.
use std::{fmt, sync::Arc};

use derive_builder::Builder;
use serde::Serialize;
use tracing::{debug, info, warn};
use visa_cache::{MAP_KEY, VisaCache, check_key};
use visa_codes::{CodeTranslator, CountryNames, Locale};

use crate::{
    aggregator::{Aggregation, Aggregator},
    fallback::fallback_countries,
    model::{Country, VisaCheckResponse, VisaMapResponse},
    provider::{ProviderError, VisaRulesProvider},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Visa provider is not configured")]
    NotConfigured,
    #[error("Visa provider failed: {0}")]
    Upstream(#[source] ProviderError),
    #[error("Invalid country code: {0:?}")]
    InvalidCode(String),
}

impl From<ProviderError> for ServiceError {
    fn from(err: ProviderError) -> Self {
        if err.is_configuration() {
            ServiceError::NotConfigured
        } else {
            ServiceError::Upstream(err)
        }
    }
}

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Cache,
    Live,
    Fallback,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Cache => "cache",
            DataSource::Live => "live",
            DataSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryListing {
    pub source: DataSource,
    pub countries: Vec<Country>,
}

#[derive(Builder, Clone, Debug)]
#[builder(public, setter(into))]
pub struct ServiceOptions {
    /// Alpha-2 code of the passport all lookups are made for
    #[builder(default = "\"SA\".to_string()")]
    pub home_passport: String,
    #[builder(default = "vec![\"IL\".to_string()]")]
    pub excluded_destinations: Vec<String>,
    #[builder(default)]
    pub default_locale: Locale,
    #[builder(default = "MAP_KEY.to_string()")]
    pub map_key: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            home_passport: "SA".to_string(),
            excluded_destinations: vec!["IL".to_string()],
            default_locale: Locale::default(),
            map_key: MAP_KEY.to_string(),
        }
    }
}

pub struct VisaService {
    provider: Arc<dyn VisaRulesProvider>,
    check_cache: Arc<dyn VisaCache<VisaCheckResponse>>,
    map_cache: Arc<dyn VisaCache<VisaMapResponse>>,
    translator: Arc<dyn CodeTranslator>,
    names: Arc<CountryNames>,
    aggregator: Aggregator,
    options: ServiceOptions,
}

impl fmt::Debug for VisaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisaService")
            .field("options", &self.options)
            .field("aggregator", &self.aggregator)
            .finish()
    }
}

impl VisaService {
    pub fn new(
        provider: Arc<dyn VisaRulesProvider>,
        check_cache: Arc<dyn VisaCache<VisaCheckResponse>>,
        map_cache: Arc<dyn VisaCache<VisaMapResponse>>,
        translator: Arc<dyn CodeTranslator>,
        names: Arc<CountryNames>,
        options: ServiceOptions,
    ) -> Self {
        let aggregator = Aggregator::new(
            translator.clone(),
            names.clone(),
            &options.home_passport,
            &options.excluded_destinations,
        );
        Self {
            provider,
            check_cache,
            map_cache,
            translator,
            names,
            aggregator,
            options,
        }
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn translator(&self) -> &Arc<dyn CodeTranslator> {
        &self.translator
    }

    /// Canonical alpha-2 for any code form.
    pub fn resolve_code(&self, code: &str) -> Result<String, ServiceError> {
        self.translator
            .to_alpha2(code)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::InvalidCode(code.to_string()))
    }

    pub async fn visa_map(&self) -> Result<VisaMapResponse, ServiceError> {
        self.visa_map_sourced().await.map(|sourced| sourced.data)
    }

    pub async fn visa_map_sourced(
        &self,
    ) -> Result<Sourced<VisaMapResponse>, ServiceError> {
        let key = &self.options.map_key;
        let home = self.aggregator.home();
        match self.map_cache.get(key).await {
            Ok(Some(map)) if map.data.is_for_passport(home) => {
                debug!(key, "Visa map served from cache");
                return Ok(Sourced {
                    source: DataSource::Cache,
                    data: map,
                });
            }
            Ok(Some(map)) => info!(
                key,
                home,
                cached = ?map.data.passport_code(),
                "Cached visa map is for another passport"
            ),
            Ok(None) => {}
            Err(err) => warn!(key, error = %err, "Visa map cache read failed"),
        }

        let map = self
            .provider
            .fetch_map(home)
            .await
            .inspect_err(|err| warn!(error = %err, "Visa map fetch failed"))?;

        if let Err(err) = self.map_cache.put(key, map.clone()).await {
            warn!(key, error = %err, "Failed to cache visa map");
        }
        Ok(Sourced {
            source: DataSource::Live,
            data: map,
        })
    }

    /// Destination list for `locale`. Never fails, falls back to the static
    /// list when neither cache nor provider has data.
    pub async fn countries(&self, locale: Locale) -> CountryListing {
        let map = match self.visa_map_sourced().await {
            Ok(map) => Some(map),
            Err(err) => {
                debug!(error = %err, "No visa map available");
                None
            }
        };

        let data = map.as_ref().map(|m| &m.data.data);
        match self.aggregator.build_country_list(data, locale) {
            Aggregation::Countries(countries) => CountryListing {
                source: map.map_or(DataSource::Fallback, |m| m.source),
                countries,
            },
            Aggregation::UseFallback => {
                info!(%locale, "Serving fallback country list");
                CountryListing {
                    source: DataSource::Fallback,
                    countries: fallback_countries(
                        &self.names,
                        locale,
                        self.aggregator.home(),
                    ),
                }
            }
        }
    }

    /// Single destination by alpha-2 (any case) or alpha-3.
    pub async fn country(&self, id: &str, locale: Locale) -> Option<Country> {
        let alpha2 = self.translator.to_alpha2(id)?.to_ascii_lowercase();
        self.countries(locale)
            .await
            .countries
            .into_iter()
            .find(|country| country.id == alpha2)
    }

    pub async fn visa_info(
        &self,
        destination: &str,
    ) -> Result<VisaCheckResponse, ServiceError> {
        self.visa_info_sourced(destination)
            .await
            .map(|sourced| sourced.data)
    }

    pub async fn visa_info_sourced(
        &self,
        destination: &str,
    ) -> Result<Sourced<VisaCheckResponse>, ServiceError> {
        let destination = self.resolve_code(destination)?;
        let home = self.aggregator.home();
        let key = check_key(home, &destination);

        match self.check_cache.get(&key).await {
            Ok(Some(check)) => {
                debug!(%key, "Visa check served from cache");
                return Ok(Sourced {
                    source: DataSource::Cache,
                    data: check,
                });
            }
            Ok(None) => {}
            Err(err) => warn!(%key, error = %err, "Visa check cache read failed"),
        }

        let check = self
            .provider
            .fetch_check(home, &destination)
            .await
            .inspect_err(|err| warn!(%key, error = %err, "Visa check fetch failed"))?;

        if let Err(err) = self.check_cache.put(&key, check.clone()).await {
            warn!(%key, error = %err, "Failed to cache visa check");
        }
        Ok(Sourced {
            source: DataSource::Live,
            data: check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::VisaStatus,
        testing::{
            FakeProvider, fjall_caches, memory_service, sample_check, sample_map,
            sample_map_for, service_with, service_with_home,
        },
    };
    use async_trait::async_trait;
    use std::time::Duration;
    use tempfile::tempdir;
    use visa_cache::{CacheError, InMemoryVisaCache};

    struct BrokenCache;

    #[async_trait]
    impl<T> VisaCache<T> for BrokenCache
    where
        T: Send + Sync + serde::Serialize + serde::de::DeserializeOwned + 'static,
    {
        fn ttl(&self) -> Duration {
            Duration::from_secs(60)
        }

        async fn get_at(
            &self,
            _key: &str,
            _now_ms: i64,
        ) -> Result<Option<T>, CacheError> {
            Err(CacheError::Storage("disk on fire".to_string()))
        }

        async fn put_at(
            &self,
            _key: &str,
            _data: T,
            _ts: i64,
        ) -> Result<(), CacheError> {
            Err(CacheError::Storage("disk on fire".to_string()))
        }
    }

    #[tokio::test]
    async fn test_visa_info_twice_hits_provider_once() {
        let provider = Arc::new(FakeProvider::healthy());
        let service = memory_service(provider.clone());

        let first = service.visa_info_sourced("FR").await.unwrap();
        let second = service.visa_info_sourced("fr").await.unwrap();

        assert_eq!(first.source, DataSource::Live);
        assert_eq!(second.source, DataSource::Cache);
        assert_eq!(first.data, second.data);
        assert_eq!(provider.check_calls(), 1);
    }

    #[tokio::test]
    async fn test_alpha3_destination_shares_cache_entry() {
        let provider = Arc::new(FakeProvider::healthy());
        let service = memory_service(provider.clone());

        service.visa_info("FR").await.unwrap();
        service.visa_info("FRA").await.unwrap();
        assert_eq!(provider.check_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let caches = fjall_caches(dir.path());

        // expired entries: the service misses and goes to the provider
        caches
            .check
            .put_at("SA-FR", sample_check("FR"), 0)
            .await
            .unwrap();
        caches
            .map
            .put_at(MAP_KEY, sample_map(&[("green", "AE")]), 0)
            .await
            .unwrap();
        let check_before = caches.check.raw("SA-FR").unwrap();
        let map_before = caches.map.raw(MAP_KEY).unwrap();

        let provider = Arc::new(FakeProvider::failing(ProviderError::Upstream {
            status: 503,
        }));
        let service =
            service_with(provider.clone(), caches.check.clone(), caches.map.clone());

        let err = service.visa_info("FR").await.unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));
        let listing = service.countries(Locale::Ar).await;
        assert_eq!(listing.source, DataSource::Fallback);

        assert_eq!(provider.check_calls(), 1);
        assert_eq!(provider.map_calls(), 1);
        assert_eq!(caches.check.raw("SA-FR").unwrap(), check_before);
        assert_eq!(caches.map.raw(MAP_KEY).unwrap(), map_before);
    }

    #[tokio::test]
    async fn test_timeout_never_writes() {
        let provider = Arc::new(FakeProvider::failing(ProviderError::Timeout));
        let check_cache = Arc::new(InMemoryVisaCache::new(Duration::from_secs(60)));
        let map_cache = Arc::new(InMemoryVisaCache::new(Duration::from_secs(60)));
        let service = service_with(provider, check_cache.clone(), map_cache.clone());

        assert!(service.visa_info("FR").await.is_err());
        assert!(service.visa_map().await.is_err());
        assert!(check_cache.is_empty());
        assert!(map_cache.is_empty());
    }

    #[tokio::test]
    async fn test_not_configured_is_distinct() {
        let service = memory_service(Arc::new(FakeProvider::failing(
            ProviderError::NotConfigured,
        )));
        assert_eq!(
            service.visa_info("FR").await.unwrap_err(),
            ServiceError::NotConfigured
        );

        let service = memory_service(Arc::new(FakeProvider::failing(
            ProviderError::Upstream { status: 502 },
        )));
        assert_eq!(
            service.visa_info("FR").await.unwrap_err(),
            ServiceError::Upstream(ProviderError::Upstream { status: 502 })
        );
    }

    #[tokio::test]
    async fn test_invalid_code_skips_provider() {
        let provider = Arc::new(FakeProvider::healthy());
        let service = memory_service(provider.clone());

        for code in ["", "F", "ZZZZ", "xx", "12a"] {
            assert!(matches!(
                service.visa_info(code).await,
                Err(ServiceError::InvalidCode(_))
            ));
        }
        assert_eq!(provider.check_calls(), 0);
    }

    #[tokio::test]
    async fn test_countries_scenario_then_cache() {
        let provider = Arc::new(FakeProvider::healthy());
        let service = memory_service(provider.clone());

        let live = service.countries(Locale::Ar).await;
        assert_eq!(live.source, DataSource::Live);
        let ids: Vec<_> = live.countries.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["ae", "bh", "fr"]);
        assert_eq!(live.countries[0].visa_status, VisaStatus::VisaFree);
        assert_eq!(live.countries[2].visa_status, VisaStatus::VisaRequired);

        let cached = service.countries(Locale::En).await;
        assert_eq!(cached.source, DataSource::Cache);
        assert_eq!(cached.countries.len(), 3);
        assert_eq!(provider.map_calls(), 1);
    }

    #[tokio::test]
    async fn test_fallback_when_unreachable_and_empty() {
        let service = memory_service(Arc::new(FakeProvider::failing(
            ProviderError::Transport("connection refused".to_string()),
        )));
        let listing = service.countries(Locale::Ar).await;
        assert_eq!(listing.source, DataSource::Fallback);
        assert!(!listing.countries.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_when_map_has_nothing_usable() {
        let provider = Arc::new(FakeProvider::new(
            Ok(sample_map(&[("green", "SA"), ("red", "IL")])),
            Ok(sample_check("FR")),
        ));
        let service = memory_service(provider);
        let listing = service.countries(Locale::En).await;
        assert_eq!(listing.source, DataSource::Fallback);
        assert!(listing.countries.iter().any(|c| c.id == "il"));
    }

    #[tokio::test]
    async fn test_fallback_excludes_configured_home() {
        let provider = Arc::new(FakeProvider::failing(ProviderError::Timeout));
        let service = service_with_home(
            "AE",
            provider,
            Arc::new(InMemoryVisaCache::new(Duration::from_secs(60))),
            Arc::new(InMemoryVisaCache::new(Duration::from_secs(60))),
        );

        for locale in [Locale::Ar, Locale::En] {
            let listing = service.countries(locale).await;
            assert_eq!(listing.source, DataSource::Fallback);
            assert!(listing.countries.iter().all(|c| c.id != "ae"));
            assert!(listing.countries.iter().any(|c| c.id == "il"));
        }
    }

    #[tokio::test]
    async fn test_cached_map_for_other_passport_is_refetched() {
        let map_cache = Arc::new(InMemoryVisaCache::new(Duration::from_secs(60)));
        map_cache
            .put(MAP_KEY, sample_map(&[("green", "AE,BH")]))
            .await
            .unwrap();

        let provider = Arc::new(FakeProvider::new(
            Ok(sample_map_for("AE", &[("green", "SA,OM"), ("red", "FR")])),
            Ok(sample_check("FR")),
        ));
        let service = service_with_home(
            "AE",
            provider.clone(),
            Arc::new(InMemoryVisaCache::new(Duration::from_secs(60))),
            map_cache.clone(),
        );

        let first = service.visa_map_sourced().await.unwrap();
        assert_eq!(first.source, DataSource::Live);
        assert_eq!(first.data.data.passport_code(), Some("AE"));
        let second = service.visa_map_sourced().await.unwrap();
        assert_eq!(second.source, DataSource::Cache);
        assert_eq!(provider.map_calls(), 1);

        let ids: Vec<_> = service
            .countries(Locale::En)
            .await
            .countries
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["fr", "om", "sa"]);
    }

    #[tokio::test]
    async fn test_broken_cache_still_serves_live() {
        let provider = Arc::new(FakeProvider::healthy());
        let service =
            service_with(provider.clone(), Arc::new(BrokenCache), Arc::new(BrokenCache));

        let check = service.visa_info_sourced("FR").await.unwrap();
        assert_eq!(check.source, DataSource::Live);
        let listing = service.countries(Locale::Ar).await;
        assert_eq!(listing.source, DataSource::Live);
        assert_eq!(listing.countries.len(), 3);
    }

    #[tokio::test]
    async fn test_country_lookup() {
        let service = memory_service(Arc::new(FakeProvider::healthy()));

        let france = service.country("FR", Locale::En).await.unwrap();
        assert_eq!(france.name, "France");
        let by_alpha3 = service.country("are", Locale::En).await.unwrap();
        assert_eq!(by_alpha3.id, "ae");
        assert!(service.country("sa", Locale::En).await.is_none());
        assert!(service.country("nope", Locale::En).await.is_none());
    }

    #[test]
    fn test_options_builder_defaults() {
        let options = ServiceOptionsBuilder::default().build().unwrap();
        assert_eq!(options.home_passport, "SA");
        assert_eq!(options.excluded_destinations, vec!["IL"]);
        assert_eq!(options.default_locale, Locale::Ar);
        assert_eq!(options.map_key, MAP_KEY);
    }
}
