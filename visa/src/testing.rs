//! Shared test doubles: a local hyper server standing in for the provider
//! and an in-process provider that counts upstream calls.
use std::{
    collections::HashMap,
    convert::Infallible,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{
    Request, Response, StatusCode,
    body::Incoming,
    header::{CONTENT_TYPE, HeaderValue},
    service::service_fn,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto::Builder,
};
use serde_json::json;
use tokio::net::TcpListener;
use visa_cache::{CacheStore, FjallVisaCache, InMemoryVisaCache, VisaCache};
use visa_codes::{CountryCodes, CountryNames, Locale};

use crate::{
    model::{VisaCheckResponse, VisaMapResponse},
    provider::{ProviderError, VisaRulesProvider},
    service::{ServiceOptionsBuilder, VisaService},
};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Answers every request with a fixed status and body after `delay`.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(status: u16, body: &'static str, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let service = service_fn(move |req: Request<Incoming>| {
                    let recorded = recorded.clone();
                    async move {
                        let method = req.method().to_string();
                        let path = req.uri().path().to_string();
                        let headers = req
                            .headers()
                            .iter()
                            .map(|(k, v)| {
                                let v = v.to_str().unwrap_or_default();
                                (k.to_string(), v.to_string())
                            })
                            .collect();
                        let payload = req
                            .into_body()
                            .collect()
                            .await
                            .map(|b| b.to_bytes())
                            .unwrap_or_default();
                        recorded.lock().unwrap().push(RecordedRequest {
                            method,
                            path,
                            headers,
                            body: String::from_utf8_lossy(&payload).into_owned(),
                        });

                        tokio::time::sleep(delay).await;
                        let mut resp = Response::new(Full::new(Bytes::from_static(
                            body.as_bytes(),
                        )));
                        *resp.status_mut() = StatusCode::from_u16(status).unwrap();
                        resp.headers_mut().insert(
                            CONTENT_TYPE,
                            HeaderValue::from_static("application/json"),
                        );
                        Ok::<_, Infallible>(resp)
                    }
                });
                tokio::spawn(async move {
                    let _ = Builder::new(TokioExecutor::new())
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn sample_map(colors: &[(&str, &str)]) -> VisaMapResponse {
    sample_map_for("SA", colors)
}

pub fn sample_map_for(passport: &str, colors: &[(&str, &str)]) -> VisaMapResponse {
    let colors: serde_json::Map<_, _> = colors
        .iter()
        .map(|(color, codes)| (color.to_string(), json!(codes)))
        .collect();
    serde_json::from_value(json!({
        "data": {"passport": {"code": passport}, "colors": colors},
        "meta": {"version": "2.0"}
    }))
    .unwrap()
}

pub fn sample_check(destination: &str) -> VisaCheckResponse {
    serde_json::from_value(json!({
        "data": {
            "passport": {"code": "SA"},
            "destination": {"code": destination},
            "visa_rules": {
                "primary_rule": {
                    "name": "Visa required",
                    "duration": "90 days",
                    "color": "red"
                }
            }
        }
    }))
    .unwrap()
}

/// Provider returning canned results and counting calls.
pub struct FakeProvider {
    map: Result<VisaMapResponse, ProviderError>,
    check: Result<VisaCheckResponse, ProviderError>,
    map_calls: AtomicUsize,
    check_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(
        map: Result<VisaMapResponse, ProviderError>,
        check: Result<VisaCheckResponse, ProviderError>,
    ) -> Self {
        Self {
            map,
            check,
            map_calls: AtomicUsize::new(0),
            check_calls: AtomicUsize::new(0),
        }
    }

    pub fn healthy() -> Self {
        Self::new(
            Ok(sample_map(&[("green", "AE,BH"), ("red", "FR")])),
            Ok(sample_check("FR")),
        )
    }

    pub fn failing(err: ProviderError) -> Self {
        Self::new(Err(err.clone()), Err(err))
    }

    pub fn map_calls(&self) -> usize {
        self.map_calls.load(Ordering::SeqCst)
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisaRulesProvider for FakeProvider {
    async fn fetch_check(
        &self,
        _passport: &str,
        _destination: &str,
    ) -> Result<VisaCheckResponse, ProviderError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.check.clone()
    }

    async fn fetch_map(&self, _passport: &str) -> Result<VisaMapResponse, ProviderError> {
        self.map_calls.fetch_add(1, Ordering::SeqCst);
        self.map.clone()
    }
}

/// Service over `provider` with the given caches, home SA, IL excluded.
pub fn service_with(
    provider: Arc<dyn VisaRulesProvider>,
    check_cache: Arc<dyn VisaCache<VisaCheckResponse>>,
    map_cache: Arc<dyn VisaCache<VisaMapResponse>>,
) -> VisaService {
    service_with_home("SA", provider, check_cache, map_cache)
}

pub fn service_with_home(
    home: &str,
    provider: Arc<dyn VisaRulesProvider>,
    check_cache: Arc<dyn VisaCache<VisaCheckResponse>>,
    map_cache: Arc<dyn VisaCache<VisaMapResponse>>,
) -> VisaService {
    let options = ServiceOptionsBuilder::default()
        .home_passport(home)
        .excluded_destinations(vec!["IL".to_string()])
        .default_locale(Locale::Ar)
        .build()
        .unwrap();
    VisaService::new(
        provider,
        check_cache,
        map_cache,
        Arc::new(CountryCodes::standard().unwrap()),
        Arc::new(CountryNames::standard()),
        options,
    )
}

pub fn memory_service(provider: Arc<dyn VisaRulesProvider>) -> VisaService {
    service_with(
        provider,
        Arc::new(InMemoryVisaCache::new(Duration::from_secs(86_400))),
        Arc::new(InMemoryVisaCache::new(Duration::from_secs(604_800))),
    )
}

pub struct FjallCaches {
    pub check: Arc<FjallVisaCache<VisaCheckResponse>>,
    pub map: Arc<FjallVisaCache<VisaMapResponse>>,
}

pub fn fjall_caches(path: &std::path::Path) -> FjallCaches {
    let store = CacheStore::open(path).unwrap();
    FjallCaches {
        check: Arc::new(
            store
                .cache(visa_cache::CacheClass::Check, Duration::from_secs(86_400))
                .unwrap(),
        ),
        map: Arc::new(
            store
                .cache(visa_cache::CacheClass::Map, Duration::from_secs(604_800))
                .unwrap(),
        ),
    }
}
