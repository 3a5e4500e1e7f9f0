use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use visa::{
    RapidApiClient, ServiceOptionsBuilder, VisaCheckResponse, VisaMapResponse,
    VisaService, api,
    cache::{CacheClass, CacheStore},
    codes::{CountryCodes, CountryNames, Locale},
    config::{AppConfig, Settings},
    logging,
};

const CONFIG_ENV: &str = "VISA_CONFIG";
const DEFAULT_CONFIG: &str = "visa.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let config = if Path::new(&config_path).exists() {
        AppConfig::from_file(&config_path)
            .with_context(|| format!("failed to load {config_path}"))?
    } else {
        AppConfig::empty()
    };
    let mut settings = Settings::from_config(&config)?;
    settings.apply_env();

    logging::init_logging(&settings.logging.level)?;
    info!(config = %config_path, "Settings loaded");

    let store = CacheStore::open(&settings.cache.path).with_context(|| {
        format!("failed to open cache at {}", settings.cache.path.display())
    })?;
    let check_cache = store
        .cache::<VisaCheckResponse>(CacheClass::Check, settings.cache.check_ttl())?;
    let map_cache =
        store.cache::<VisaMapResponse>(CacheClass::Map, settings.cache.map_ttl())?;

    let provider = RapidApiClient::from_settings(&settings.provider)?;
    if !provider.is_configured() {
        warn!("RAPIDAPI_KEY is not set, serving cached and fallback data only");
    }

    let server = &settings.server;
    let options = ServiceOptionsBuilder::default()
        .home_passport(server.home_passport.clone())
        .excluded_destinations(server.excluded_destinations.clone())
        .default_locale(server.default_locale.parse::<Locale>()?)
        .build()?;

    let service = Arc::new(VisaService::new(
        Arc::new(provider),
        Arc::new(check_cache),
        Arc::new(map_cache),
        Arc::new(CountryCodes::standard()?),
        Arc::new(CountryNames::standard()),
        options,
    ));

    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .context("invalid server bind address")?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, home = %server.home_passport, "Visa API listening");

    tokio::select! {
        result = api::serve(listener, service) => result?,
        _ = signal::ctrl_c() => info!("Shutdown requested"),
    }
    Ok(())
}
