// API module entry
// Dispatches requests to the market data lookups and the health report

mod brands;
mod campaigns;
mod countries;
mod error;
mod health;
mod routes;
mod sectors;
mod subcategories;
mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode, Version};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

pub use error::ApiError;
use routes::Endpoint;

/// Entry point for every HTTP request
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let started = Instant::now();
    let mut entry = state.config.logging.access_log.then(|| access_entry(&req, peer_addr));

    let mut response = route(req, &state).await;
    http::set_server_name(&mut response, &state.config.http.server_name);

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Method validation, body handling and endpoint dispatch
async fn route<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let prefixes = &state.config.http.path_prefixes;
    let Some(endpoint) = Endpoint::resolve(req.uri().path(), prefixes) else {
        return http::error_response(&ApiError::UnknownRoute {
            path: req.uri().path().to_string(),
            available_endpoints: Endpoint::available_paths(prefixes),
        });
    };

    if req.method() == Method::OPTIONS {
        return http::build_options_response();
    }

    if endpoint == Endpoint::Health {
        return health_response(state);
    }

    if endpoint.requires_post() && req.method() != Method::POST {
        logger::log_warning(&format!(
            "Method not allowed: {} {}",
            req.method(),
            req.uri().path()
        ));
        return http::error_response(&ApiError::MethodNotAllowed);
    }

    let body = match read_body(req, state.config.http.max_body_size).await {
        Ok(body) => body,
        Err(e) => {
            logger::log_warning(&format!("[{}] {e}", endpoint.name()));
            return http::error_response(&e);
        }
    };

    match endpoint {
        Endpoint::BrandDetails => respond(endpoint, &body, brands::brand_details),
        Endpoint::SectorOverview => {
            respond(endpoint, &body, |req| Ok(sectors::sector_overview(req)))
        }
        Endpoint::SubcategoryAnalysis => {
            respond(endpoint, &body, subcategories::subcategory_analysis)
        }
        Endpoint::CountryAnalysis => {
            respond(endpoint, &body, |req| Ok(countries::country_analysis(req)))
        }
        Endpoint::RealCampaigns => {
            respond(endpoint, &body, |req| Ok(campaigns::real_campaigns(req)))
        }
        Endpoint::Health => health_response(state),
    }
}

/// Parse the body, run the handler under the panic guard and render the outcome
fn respond<Req, Resp, F>(endpoint: Endpoint, body: &[u8], handler: F) -> Response<Full<Bytes>>
where
    Req: DeserializeOwned,
    Resp: Serialize,
    F: FnOnce(Req) -> Result<Resp, ApiError>,
{
    let outcome = parse_body::<Req>(body).and_then(|req| guarded(endpoint, || handler(req)));

    match outcome {
        Ok(resp) => http::json_response(StatusCode::OK, &resp),
        Err(e) => {
            if e.status().is_server_error() {
                logger::log_handler_failure(endpoint.name(), &e);
            }
            http::error_response(&e)
        }
    }
}

fn health_response(state: &AppState) -> Response<Full<Bytes>> {
    let now = chrono::Utc::now();
    let outcome = guarded(Endpoint::Health, || {
        health::health_check(
            &state.config.service,
            &state.region,
            state.config.http.public_prefix(),
            now,
        )
    });

    match outcome {
        Ok(report) => http::json_response(StatusCode::OK, &report),
        Err(e) => {
            logger::log_handler_failure(Endpoint::Health.name(), &e);
            http::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &health::unhealthy(&e, now),
            )
        }
    }
}

/// Run a handler, converting a panic into an internal error
fn guarded<T>(
    endpoint: Endpoint,
    handler: impl FnOnce() -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    panic::catch_unwind(AssertUnwindSafe(handler)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "handler panicked".to_string());
        logger::log_error(&format!("[{}] panic: {message}", endpoint.name()));
        Err(ApiError::Internal(message))
    })
}

/// Collect the request body, enforcing the configured size limit
async fn read_body<B>(req: Request<B>, max_body_size: u64) -> Result<Bytes, ApiError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    if let Some(size) = declared_length(&req) {
        if size > max_body_size {
            return Err(ApiError::PayloadTooLarge {
                size,
                max: max_body_size,
            });
        }
    }

    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| ApiError::BodyRead(e.to_string()))?
        .to_bytes();

    let size = bytes.len() as u64;
    if size > max_body_size {
        return Err(ApiError::PayloadTooLarge {
            size,
            max: max_body_size,
        });
    }
    Ok(bytes)
}

/// Content-Length header value, when present and valid
fn declared_length<B>(req: &Request<B>) -> Option<u64> {
    let value = req.headers().get("content-length")?;
    match value.to_str().ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(size) => Some(size),
        None => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: {value:?}, skipping size check"
            ));
            None
        }
    }
}

/// Decode a JSON request body.
///
/// An empty body or a JSON array reads as `{}`. Scalars at the top level
/// are rejected.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice::<Value>(body)? {
            Value::Array(_) => Value::Object(Map::new()),
            other => other,
        }
    };
    Ok(serde_json::from_value(value)?)
}

fn access_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn test_state() -> Arc<AppState> {
        let mut config = Config::load_from("tests/no-such-config").unwrap();
        config.logging.access_log = false;
        Arc::new(AppState::with_region(config, "fra1".to_string()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:52100".parse().unwrap()
    }

    async fn send(method: Method, path: &str, body: &str) -> (StatusCode, Response<Full<Bytes>>) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap();
        let response = handle_request(req, test_state(), peer()).await.unwrap();
        (response.status(), response)
    }

    async fn body_json(response: Response<Full<Bytes>>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post(path: &str, body: Value) -> (StatusCode, Value) {
        let (status, response) = send(Method::POST, path, &body.to_string()).await;
        (status, body_json(response).await)
    }

    fn assert_cors(response: &Response<Full<Bytes>>) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    #[tokio::test]
    async fn test_brand_details_bmw() {
        let (status, body) = post("/brands/brand-details", json!({ "brand_name": "BMW" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["brand_name"], "BMW");
        assert_eq!(body["financial_data"]["annual_ad_spend_formatted"], "€85M");
    }

    #[tokio::test]
    async fn test_brand_details_missing_name() {
        let (status, body) = post("/brands/brand-details", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Brand name is required" }));
    }

    #[tokio::test]
    async fn test_brand_details_unknown() {
        let (status, body) = post("/brands/brand-details", json!({ "brand_name": "Skoda" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["available_brands"].as_array().unwrap().len() <= 10);
    }

    #[tokio::test]
    async fn test_sector_overview_automotive() {
        let (status, body) =
            post("/brands/sector-overview", json!({ "industry": "automotive" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sector_totals"]["total_ad_spend"], 890_000_000);
    }

    #[tokio::test]
    async fn test_sector_overview_unknown_is_still_ok() {
        let (status, body) = post("/brands/sector-overview", json!({ "industry": "retail" })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("error").is_some());
        assert!(!body["available_industries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subcategory_analysis() {
        let (status, body) = post(
            "/brands/subcategory-analysis",
            json!({ "industry": "automotive", "subcategory": "luxury" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total_brands"], 4);

        let (status, body) = post(
            "/brands/subcategory-analysis",
            json!({ "industry": "automotive", "subcategory": "budget" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["available_subcategories"], json!(["luxury", "mainstream"]));
    }

    #[tokio::test]
    async fn test_real_campaigns_google_fashion() {
        let (status, body) = post(
            "/real-campaigns",
            json!({ "industry": "fashion", "platform": "google" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let campaigns = body["campaigns"].as_array().unwrap();
        assert!(!campaigns.is_empty());
        assert!(campaigns.iter().all(|c| c["platform"] == "Google Ads"));
    }

    #[tokio::test]
    async fn test_api_prefix_alias() {
        let (status, body) =
            post("/api/brands/brand-details", json!({ "brand_name": "SAP" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headquarters"], "Walldorf");
    }

    #[tokio::test]
    async fn test_options_on_every_endpoint() {
        for endpoint in Endpoint::ALL {
            let (status, response) = send(Method::OPTIONS, endpoint.path(), "").await;
            assert_eq!(status, StatusCode::OK, "{}", endpoint.name());
            assert_cors(&response);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_get_on_data_endpoints_is_405() {
        for endpoint in Endpoint::DATA {
            let (status, response) = send(Method::GET, endpoint.path(), "").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_cors(&response);
            assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
        }
        let (status, _) = send(Method::PUT, "/real-campaigns", "{}").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_answers_any_method() {
        for method in [Method::GET, Method::POST, Method::DELETE] {
            let (status, response) = send(method, "/health", "").await;
            assert_eq!(status, StatusCode::OK);
            assert_cors(&response);
            let body = body_json(response).await;
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["region"], "fra1");
            assert_eq!(body["endpoints"]["real-campaigns"], "/api/real-campaigns");
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, response) = send(Method::GET, "/brands/everything", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_cors(&response);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Not Found");
        assert!(body["available_endpoints"]
            .as_array()
            .unwrap()
            .contains(&json!("/health")));
    }

    #[tokio::test]
    async fn test_empty_body_reads_as_empty_object() {
        let (status, response) = send(Method::POST, "/real-campaigns", "").await;
        assert_eq!(status, StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["industry"], "automotive");

        let (status, _) = send(Method::POST, "/brands/brand-details", "  ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, response) = send(Method::POST, "/brands/sector-overview", "{industry:").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert_eq!(body_json(response).await["error"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let big = format!(r#"{{"brand_name":"{}"}}"#, "x".repeat(2 * 1024 * 1024));
        let (status, response) = send(Method::POST, "/brands/brand-details", &big).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_server_header() {
        let (_, response) = send(Method::GET, "/health", "").await;
        assert_eq!(response.headers()["server"], "adspend-api");
    }

    #[tokio::test]
    async fn test_null_fields_keep_always_ok_endpoints_ok() {
        let (status, body) =
            post("/real-campaigns", json!({ "industry": "fashion", "platform": null })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["campaigns"].as_array().unwrap().len(), 3);

        let (status, body) = post(
            "/brands/sector-overview",
            json!({ "industry": "automotive", "country_filter": null }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["country_filter"].is_null());
        assert_eq!(body["sector_totals"]["total_ad_spend"], 890_000_000);
    }

    #[tokio::test]
    async fn test_wrong_typed_fields_keep_always_ok_endpoints_ok() {
        let (status, body) = post(
            "/real-campaigns",
            json!({ "industry": 5, "countries": ["BE"], "platform": 1, "include_visuals": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["industry"], 5);
        assert_eq!(body["summary"]["total_campaigns"], 4);
        assert!(body["campaigns"][0]["visuals"].is_null());

        let (status, body) =
            post("/brands/sector-overview", json!({ "industry": ["automotive"], "currency": 1 }))
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currency"], 1);
    }

    #[tokio::test]
    async fn test_null_metadata_on_lookups() {
        let (status, body) =
            post("/brands/brand-details", json!({ "brand_name": "BMW", "currency": null })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["currency"].is_null());

        let (status, body) = post(
            "/brands/subcategory-analysis",
            json!({ "industry": "automotive", "subcategory": null }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["available_subcategories"], json!(["luxury", "mainstream"]));
    }

    #[tokio::test]
    async fn test_numeric_brand_name_is_a_miss() {
        let (status, body) = post("/brands/brand-details", json!({ "brand_name": 123 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Brand \"123\" not found");
    }

    #[tokio::test]
    async fn test_array_body_reads_as_empty_object() {
        let (status, response) = send(Method::POST, "/real-campaigns", "[1, 2]").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_json(response).await["industry"], "automotive");

        let (status, _) = send(Method::POST, "/real-campaigns", "42").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_country_analysis() {
        let (status, body) = post(
            "/api/brands/country-analysis",
            json!({ "country": "Belgium", "currency": "EUR" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["top_brands"][0]["name"], "Belgium Auto Leader");
        assert_eq!(body["summary"]["total_ad_spend_formatted"], "€3.2B");

        let (status, _) = send(Method::GET, "/brands/country-analysis", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_guard_turns_panic_into_internal_error() {
        let result: Result<(), ApiError> =
            guarded(Endpoint::BrandDetails, || panic!("table corrupted"));
        let err = result.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_body()["message"], "table corrupted");
    }

    #[test]
    fn test_respond_renders_internal_error_as_500() {
        let response = respond(Endpoint::SectorOverview, b"{}", |_: Value| {
            Err::<Value, _>(ApiError::Internal("lookup failed".into()))
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
