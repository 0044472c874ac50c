use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::AppState;
use super::error::ApiError;
use crate::analyzers::types::{
    ConstructorStanding, DriverStanding, DriverStat, RaceResult, TimelinePoint,
};
use crate::analyzers::{
    compute_driver_stats, compute_points_timeline, constructor_standings, driver_standings,
};
use crate::error::Error;
use crate::season::Season;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}

type SeasonParam = Result<Query<SeasonQuery>, QueryRejection>;

async fn load_season(state: &AppState, query: SeasonParam) -> Result<Vec<RaceResult>, ApiError> {
    // Malformed query strings (e.g. a repeated `season`) still get a JSON error
    let Query(query) = query.map_err(|rejection| {
        Error::invalid_season("", format!("bad query string: {}", rejection.body_text()))
    })?;
    let season = Season::parse(query.season.as_deref().unwrap_or_default())?;
    let results = state.api.race_results(season).await?;
    debug!(%season, results = results.len(), "Season loaded");
    Ok(results)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn driver_standings_handler(
    State(state): State<AppState>,
    query: SeasonParam,
) -> Result<Json<Vec<DriverStanding>>, ApiError> {
    let results = load_season(&state, query).await?;
    Ok(Json(driver_standings(&results)))
}

pub async fn constructor_standings_handler(
    State(state): State<AppState>,
    query: SeasonParam,
) -> Result<Json<Vec<ConstructorStanding>>, ApiError> {
    let results = load_season(&state, query).await?;
    Ok(Json(constructor_standings(&results)))
}

pub async fn points_timeline_handler(
    State(state): State<AppState>,
    query: SeasonParam,
) -> Result<Json<Vec<TimelinePoint>>, ApiError> {
    let results = load_season(&state, query).await?;
    Ok(Json(compute_points_timeline(&results)))
}

pub async fn driver_stats_handler(
    State(state): State<AppState>,
    query: SeasonParam,
) -> Result<Json<Vec<DriverStat>>, ApiError> {
    let results = load_season(&state, query).await?;
    Ok(Json(compute_driver_stats(&results)))
}
