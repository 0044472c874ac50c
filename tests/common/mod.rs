use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use f1_stats_explorer::config::AppConfig;
use f1_stats_explorer::fetch::{BasicClient, HttpClient};
use f1_stats_explorer::http::{AppState, build_router};
use f1_stats_explorer::infra::jolpica::JolpicaClient;
use std::time::Duration;

pub const SAMPLE_2021: &str = include_str!("../fixtures/results_2021.json");

const EMPTY_SEASON: &str = r#"{"MRData": {"limit": "100", "offset": "0", "total": "0",
    "RaceTable": {"season": "2026", "Races": []}}}"#;

/// Stand-in for the Jolpica API.
///
/// 2021 serves the sample, 2026 has no races yet, 1999 is down, 2005
/// returns a foreign shape and anything else is unknown.
async fn upstream_results(Path((season, file)): Path<(String, String)>) -> Response {
    if file != "results.json" {
        return StatusCode::NOT_FOUND.into_response();
    }
    match season.as_str() {
        "2021" => ([("content-type", "application/json")], SAMPLE_2021).into_response(),
        "2026" => ([("content-type", "application/json")], EMPTY_SEASON).into_response(),
        "1999" => (StatusCode::INTERNAL_SERVER_ERROR, "database offline").into_response(),
        "2005" => ([("content-type", "application/json")], r#"{"seasons": []}"#).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn spawn_upstream() -> SocketAddr {
    spawn(Router::new().route("/f1/:season/:file", get(upstream_results))).await
}

/// Starts the service against a fake upstream and returns its base URL.
pub async fn spawn_app() -> String {
    let upstream = spawn_upstream().await;

    let config = AppConfig {
        api_base_url: format!("http://{upstream}/f1"),
        timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };
    let state = AppState::from_config(&config).expect("state");

    let addr = spawn(build_router(state)).await;
    format!("http://{addr}")
}

/// Starts the service with an upstream nobody listens on.
pub async fn spawn_app_with_dead_upstream() -> String {
    // Bind then drop to get a port that refuses connections
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let dead = listener.local_addr().expect("local addr");
    drop(listener);

    let http: Arc<dyn HttpClient> = Arc::new(
        BasicClient::new(Duration::from_secs(2), Duration::from_secs(1)).expect("client"),
    );
    let api = JolpicaClient::new(http, &format!("http://{dead}/f1"), 100);
    let addr = spawn(build_router(AppState::new(Arc::new(api)))).await;
    format!("http://{addr}")
}

pub async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::get(url).await.expect("request");
    let status = resp.status().as_u16();
    let body = resp.json().await.expect("json body");
    (status, body)
}
