use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use super::wire::{MrData, ResultsEnvelope};
use crate::analyzers::types::RaceResult;
use crate::error::{Error, Result};
use crate::fetch::{HttpClient, fetch};
use crate::season::Season;
use crate::services::season_api::SeasonApi;

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Largest page the Jolpica mirror serves; bigger limits are clamped upstream.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Characters of an upstream error body kept in the client-facing message.
const BODY_EXCERPT_CHARS: usize = 120;

/// First line-folded `BODY_EXCERPT_CHARS` characters of an error body.
fn body_excerpt(body: &str) -> String {
    let folded = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match folded.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &folded[..cut]),
        None => folded,
    }
}

/// Fetches season results from the Jolpica (Ergast-compatible) API.
pub struct JolpicaClient<C> {
    http: C,
    base_url: String,
    page_size: u32,
}

impl<C: HttpClient> JolpicaClient<C> {
    pub fn new(http: C, base_url: &str, page_size: u32) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        }
    }

    fn page_url(&self, season: Season, offset: usize) -> String {
        format!(
            "{}/{}/results.json?limit={}&offset={}",
            self.base_url, season, self.page_size, offset
        )
    }

    async fn fetch_page(&self, season: Season, offset: usize) -> Result<MrData> {
        let url = self.page_url(season, offset);
        debug!(%url, "Requesting results page");

        let response = fetch(&self.http, &url).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::SeasonNotFound {
                season: season.year(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "Upstream error response");
            return Err(Error::UpstreamUnavailable {
                message: format!("API returned status {}: {}", status, body_excerpt(&body)),
            });
        }

        let envelope: ResultsEnvelope = response.json().await?;
        Ok(envelope.mr_data)
    }
}

#[async_trait]
impl<C: HttpClient> SeasonApi for JolpicaClient<C> {
    #[tracing::instrument(skip_all, fields(season = %season))]
    async fn race_results(&self, season: Season) -> Result<Vec<RaceResult>> {
        let mut results = Vec::new();
        let mut offset = 0usize;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(season, offset).await?;
            pages += 1;

            let total = page.total()?;
            let served_offset = page.offset()?;
            if served_offset != offset {
                return Err(Error::upstream_format(format!(
                    "requested offset {offset}, upstream served {served_offset}"
                )));
            }
            let rows = page.row_count();

            for race in page.race_table.races {
                results.extend(race.into_results()?);
            }

            offset += rows;
            debug!(page = pages, rows, offset, total, "Results page decoded");

            if rows == 0 || offset >= total {
                break;
            }
        }

        // A race split across pages arrives as two contiguous runs; the
        // stable sort joins them without reordering finishers
        results.sort_by_key(|r| r.round);

        info!(pages, results = results.len(), "Season results fetched");
        Ok(results)
    }
}
