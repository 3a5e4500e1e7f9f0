//! Minimal hyper-based JSON API in front of `VisaService`.
use std::{convert::Infallible, sync::Arc};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    Method, Request, Response, StatusCode,
    body::Incoming,
    header::{CONTENT_TYPE, HeaderName, HeaderValue},
    service::service_fn,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto::Builder,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{debug, error, warn};
use visa_codes::Locale;

use crate::{
    fields::country_fields,
    service::{DataSource, ServiceError, VisaService},
};

type RespBody = Full<Bytes>;

/// Tells the UI whether data is live, cached or the static fallback.
pub const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

const ENCODING_FAILED: &[u8] =
    br#"{"error":{"code":"internal_error","message":"encoding failed"}}"#;

fn build_response(
    status: StatusCode,
    content_type: &'static str,
    body: Bytes,
) -> Response<RespBody> {
    let mut resp = Response::new(Full::new(body));
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<RespBody> {
    match serde_json::to_vec(body) {
        Ok(bytes) => build_response(status, "application/json", Bytes::from(bytes)),
        Err(err) => {
            error!(error = %err, "Failed to encode response");
            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "application/json",
                Bytes::from_static(ENCODING_FAILED),
            )
        }
    }
}

fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> Response<RespBody> {
    json_response(
        status,
        &ErrorEnvelope {
            error: ErrorBody {
                code,
                message: message.into(),
            },
        },
    )
}

fn with_source(mut resp: Response<RespBody>, source: DataSource) -> Response<RespBody> {
    resp.headers_mut()
        .insert(DATA_SOURCE_HEADER, HeaderValue::from_static(source.as_str()));
    resp
}

fn service_error_response(err: &ServiceError) -> Response<RespBody> {
    match err {
        ServiceError::NotConfigured => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "not_configured",
            "visa data provider is not configured",
        ),
        ServiceError::Upstream(inner) => error_response(
            StatusCode::BAD_GATEWAY,
            "upstream_error",
            inner.to_string(),
        ),
        ServiceError::InvalidCode(code) => error_response(
            StatusCode::BAD_REQUEST,
            "invalid_code",
            format!("{code:?} is not a known country code"),
        ),
    }
}

/// `lang` query parameter, or the configured default.
fn locale_from_query(query: Option<&str>, default: Locale) -> Locale {
    query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "lang")
                .and_then(|(_, value)| value.parse().ok())
        })
        .unwrap_or(default)
}

/// Dispatch one request. Split from `handle` so routing can be exercised
/// without a socket.
pub async fn route(
    service: &VisaService,
    method: &Method,
    path: &str,
    query: Option<&str>,
) -> Response<RespBody> {
    if *method != Method::GET {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            format!("{method} is not supported"),
        );
    }

    let locale = locale_from_query(query, service.options().default_locale);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["healthz"] => {
            build_response(StatusCode::OK, "text/plain", Bytes::from_static(b"ok"))
        }
        ["api", "countries"] => {
            let listing = service.countries(locale).await;
            with_source(
                json_response(StatusCode::OK, &listing.countries),
                listing.source,
            )
        }
        ["api", "countries", id] => match service.country(id, locale).await {
            Some(country) => json_response(StatusCode::OK, &country),
            None => error_response(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("country {id:?} not found"),
            ),
        },
        ["api", "countries", id, "fields"] => match service.resolve_code(id) {
            Ok(alpha2) => json_response(StatusCode::OK, &country_fields(&alpha2)),
            Err(_) => error_response(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("country {id:?} not found"),
            ),
        },
        ["api", "visa-map"] => match service.visa_map_sourced().await {
            Ok(map) => with_source(json_response(StatusCode::OK, &map.data), map.source),
            Err(err) => {
                warn!(error = %err, "Visa map unavailable");
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "not_available",
                    "visa map is not available",
                )
            }
        },
        ["api", "visa-info", code] => match service.visa_info_sourced(code).await {
            Ok(check) => {
                with_source(json_response(StatusCode::OK, &check.data), check.source)
            }
            Err(err) => service_error_response(&err),
        },
        _ => error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no route for {path}"),
        ),
    }
}

async fn handle(
    req: Request<Incoming>,
    service: Arc<VisaService>,
) -> Result<Response<RespBody>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let resp = route(&service, &method, uri.path(), uri.query()).await;
    debug!(
        %method,
        path = uri.path(),
        status = resp.status().as_u16(),
        "Handled request"
    );
    Ok(resp)
}

/// Accept connections on `listener` until it fails.
pub async fn serve(
    listener: TcpListener,
    service: Arc<VisaService>,
) -> Result<(), std::io::Error> {
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let service = service.clone();
        let handler = service_fn(move |req| handle(req, service.clone()));
        tokio::spawn(async move {
            if let Err(err) = Builder::new(TokioExecutor::new())
                .serve_connection(io, handler)
                .await
            {
                error!(?err, "api server connection error");
            }
        });
    }
}
