//! HTTP surface: JSON routes per season plus the dashboard page.

mod error;
mod handlers;
mod middleware;

pub use error::{ApiError, error_status};

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::fetch::{BasicClient, Retry};
use crate::infra::jolpica::JolpicaClient;
use crate::services::SeasonApi;

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SeasonApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn SeasonApi>) -> Self {
        Self { api }
    }

    /// Wires the Jolpica client over a retrying `reqwest` client.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let basic = BasicClient::new(config.timeout, config.connect_timeout)?;
        let http = Retry::new(basic, config.max_retries, config.retry_backoff);
        let api = JolpicaClient::new(http, &config.api_base_url, config.page_size);
        Ok(Self::new(Arc::new(api)))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/standings/drivers",
            get(handlers::driver_standings_handler),
        )
        .route(
            "/standings/constructors",
            get(handlers::constructor_standings_handler),
        )
        .route("/races/points", get(handlers::points_timeline_handler))
        .route("/stats/pilots", get(handlers::driver_stats_handler))
        .layer(axum::middleware::from_fn(middleware::allow_any_origin))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .with_state(state)
}
