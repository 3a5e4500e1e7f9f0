//! # visa - visa status aggregation for a visa application wizard
//!
//! `visa` sits between a paid third-party visa-rules API and the wizard UI.
//! It answers "what do I need to travel from my home country to X" for a
//! fixed home passport, keeps provider calls to a minimum with durable TTL
//! caches, and keeps the UI populated when the provider is down.
//!
//! ## Features
//!
//! - **Cache-first lookups**: detailed route checks cached for a day, the
//!   bulk color map for a week, both on disk (`visa-cache`).
//! - **Localized destination list**: Arabic and English names, locale-aware
//!   ordering, flags, and a static fallback list.
//! - **Map styling**: world map features resolved through the numeric,
//!   alpha-3 and alpha-2 code universes (`visa-codes`).
//! - **JSON API**: a small hyper server under `/api`.
//!
//! ## Modules
//!
//! - `provider`: HTTP client for the visa-rules API.
//! - `service`: cache, provider and fallback chain.
//! - `aggregator`: visa map to sorted country list.
//! - `map`: map feature styling.
//! - `api`: HTTP routes.
pub mod aggregator;
pub mod api;
pub mod fallback;
pub mod fields;
pub mod logging;
pub mod map;
pub mod model;
pub mod provider;
pub mod service;
#[cfg(test)]
mod testing;

pub use aggregator::{Aggregation, Aggregator, NameResolver};
pub use map::{FeatureStyle, MapColorizer, StyledFeature};
pub use model::{
    Country, VisaCheckResponse, VisaMapData, VisaMapResponse, VisaStatus,
    VisaStatusColor,
};
pub use provider::{ProviderError, RapidApiClient, VisaRulesProvider};
pub use service::{
    CountryListing, DataSource, ServiceError, ServiceOptions,
    ServiceOptionsBuilder, Sourced, VisaService,
};
// re-export
pub use visa_cache as cache;
pub use visa_codes as codes;
pub use visa_config as config;
