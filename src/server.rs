// src/server.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::{convert::Infallible, sync::Arc, time::Instant};
use tracing::{info, warn};
use url::Url;
use warp::{
    http::{
        header::{
            HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
            CACHE_CONTROL,
        },
        StatusCode,
    },
    reply::{Reply, Response},
    Filter, Rejection,
};

use crate::config::Config;
use crate::fetch::fetch_walk_audits;

const CDN_CACHE_CONTROL: &str = "cdn-cache-control";

/// Immutable per-process state shared by every request.
pub struct AppState {
    client: Client,
    sheet_url: Url,
    cache_control: HeaderValue,
    cdn_cache_control: HeaderValue,
}

impl AppState {
    pub fn new(client: Client, config: &Config) -> Result<Self> {
        Ok(Self {
            client,
            sheet_url: config.sheet_url.clone(),
            cache_control: HeaderValue::from_str(&config.cache.cache_control())
                .context("building Cache-Control header")?,
            cdn_cache_control: HeaderValue::from_str(&config.cache.cdn_cache_control())
                .context("building CDN-Cache-Control header")?,
        })
    }
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "walk-audits"
    })))
}

async fn list_walk_audits(state: Arc<AppState>) -> Result<Response, Infallible> {
    let start = Instant::now();

    match fetch_walk_audits(&state.client, &state.sheet_url).await {
        Ok(audits) => {
            info!(
                records = audits.len(),
                elapsed = ?start.elapsed(),
                "Served walk audits"
            );
            let mut res = warp::reply::json(&audits).into_response();
            let headers = res.headers_mut();
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
            headers.insert(CACHE_CONTROL, state.cache_control.clone());
            headers.insert(
                HeaderName::from_static(CDN_CACHE_CONTROL),
                state.cdn_cache_control.clone(),
            );
            Ok(res)
        }
        Err(e) => {
            warn!(error = %e, elapsed = ?start.elapsed(), "Fetching walk audits failed");
            Ok(warp::reply::with_status(e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response())
        }
    }
}

/// `GET /health`, `GET /walk-audits` and `GET /`.
pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health_check);

    let with_state = warp::any().map(move || state.clone());
    let audits = warp::path("walk-audits")
        .and(warp::path::end())
        .or(warp::path::end())
        .unify()
        .and(warp::get())
        .and(with_state)
        .and_then(list_walk_audits);

    health.or(audits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/walk_audits.html"
    ));

    async fn state_for(server: &MockServer) -> Arc<AppState> {
        let config = Config {
            sheet_url: Url::parse(&format!("{}/pubhtml", server.uri())).unwrap(),
            ..Config::default()
        };
        Arc::new(AppState::new(Client::new(), &config).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        let api = routes(state_for(&server).await);

        let res = warp::test::request().path("/health").reply(&api).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(std::str::from_utf8(res.body()).unwrap().contains("healthy"));
    }

    #[tokio::test]
    async fn serves_json_with_cache_and_cors_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .mount(&server)
            .await;
        let api = routes(state_for(&server).await);

        let res = warp::test::request().path("/walk-audits").reply(&api).await;
        assert_eq!(res.status(), StatusCode::OK);

        let headers = res.headers();
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET");
        assert_eq!(
            headers["cache-control"],
            "public, max-age=300, s-maxage=3600, stale-while-revalidate=86400"
        );
        assert_eq!(
            headers["cdn-cache-control"],
            "public, max-age=3600, stale-while-revalidate=86400"
        );

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["neighborhood"], "DORCHESTER");
        assert_eq!(rows[0]["view"], "https://example.com/doc");
    }

    #[tokio::test]
    async fn root_path_serves_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .mount(&server)
            .await;
        let api = routes(state_for(&server).await);

        let res = warp::test::request().path("/").reply(&api).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn upstream_failure_is_plain_text_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let api = routes(state_for(&server).await);

        let res = warp::test::request().path("/walk-audits").reply(&api).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get("cache-control").is_none());
        let body = std::str::from_utf8(res.body()).unwrap();
        assert!(body.contains("503"), "{}", body);
    }

    #[tokio::test]
    async fn rejects_post() {
        let server = MockServer::start().await;
        let api = routes(state_for(&server).await);

        let res = warp::test::request()
            .method("POST")
            .path("/walk-audits")
            .reply(&api)
            .await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
