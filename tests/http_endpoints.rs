// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mikrotik_kid_control_exporter::{
    AppState, Collector, Config, KidControlClient, MetricsRegistry, RouterClientConfig,
    create_router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEVICES_PATH: &str = "/rest/ip/kid-control/device";
const RESET_PATH: &str = "/rest/ip/kid-control/device/reset-counters";

fn make_state(router_url: &str) -> Arc<AppState> {
    let router = RouterClientConfig::new(router_url, "admin", "");
    let config = Config {
        server_addr: "127.0.0.1:9180".to_string(),
        router: router.clone(),
    };
    let client = KidControlClient::new(router).unwrap();
    let collector = Collector::new(client, MetricsRegistry::new());
    Arc::new(AppState { config, collector })
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn mock_router(devices_status: u16, reset_status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(devices_status).set_body_json(json!([
            {
                "mac-address": "aa:bb:cc:dd:ee:ff",
                "name": "foobar",
                "bytes-down": "42069",
                "bytes-up": "2137"
            },
            {
                "mac-address": "AA:BB:CC:DD:EE:00",
                "name": "",
                "bytes-down": "69420",
                "bytes-up": "7312"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(RESET_PATH))
        .respond_with(ResponseTemplate::new(reset_status))
        .mount(&server)
        .await;
    server
}

// --- / endpoint ---

#[tokio::test]
async fn index_returns_welcome_page() {
    let state = make_state("http://127.0.0.1:9");
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert_eq!(
        body,
        "<h1>Welcome to Mikrotik Bandwidth-Monitor data exporter.</h1>\
         Metrics are available: <a href='/metrics'>here</a>."
    );
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_returns_200_with_openmetrics_content_type() {
    let server = mock_router(200, 200).await;
    let app = create_router(make_state(&server.uri()));

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        ct.contains("openmetrics-text"),
        "Expected OpenMetrics content-type, got: {ct}"
    );
}

#[tokio::test]
async fn metrics_contains_device_gauges() {
    let server = mock_router(200, 200).await;
    let app = create_router(make_state(&server.uri()));

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    let body = body_string(resp).await;

    assert!(body.contains(r#"bytes_down{mac="AA:BB:CC:DD:EE:FF",name="foobar"} 42069"#));
    assert!(body.contains(r#"bytes_up{mac="AA:BB:CC:DD:EE:FF",name="foobar"} 2137"#));
    assert!(body.contains(r#"bytes_down{mac="AA:BB:CC:DD:EE:00",name="AA:BB:CC:DD:EE:00"} 69420"#));
    assert!(body.contains(r#"bytes_up{mac="AA:BB:CC:DD:EE:00",name="AA:BB:CC:DD:EE:00"} 7312"#));
    assert!(body.contains("mikrotik_kid_control_scrapes_total 1"));
}

#[tokio::test]
async fn metrics_fetch_failure_returns_500() {
    let server = mock_router(500, 200).await;
    let app = create_router(make_state(&server.uri()));

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, "Data request failed");
}

#[tokio::test]
async fn metrics_reset_failure_returns_500() {
    let server = mock_router(200, 500).await;
    let app = create_router(make_state(&server.uri()));

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, "Reset request failed");
}

#[tokio::test]
async fn metrics_after_reset_failure_exposes_the_published_values() {
    let failing = mock_router(200, 500).await;
    let state = make_state(&failing.uri());

    let resp = create_router(state.clone())
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let encoded = state.collector.metrics().encode_metrics().await.unwrap();
    assert!(encoded.contains(r#"bytes_down{mac="AA:BB:CC:DD:EE:FF",name="foobar"} 42069"#));
}

// --- /health endpoint ---

#[tokio::test]
async fn health_returns_ok_before_first_scrape() {
    let state = make_state("http://127.0.0.1:9");
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/health").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(health["router"], "http://127.0.0.1:9");
    assert_eq!(health["scrapes_total"], 0);
    assert_eq!(health["scrape_errors_total"], 0);
}

#[tokio::test]
async fn health_counts_scrape_outcomes() {
    let server = mock_router(200, 500).await;
    let state = make_state(&server.uri());

    let _ = create_router(state.clone())
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    let resp = create_router(state)
        .oneshot(Request::get("/health").body(String::new()).unwrap())
        .await
        .unwrap();
    let health: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(health["scrapes_total"], 0);
    assert_eq!(health["scrape_errors_total"], 1);
}
