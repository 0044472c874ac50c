//! Trait for sources of per-season race results.

use crate::analyzers::types::RaceResult;
use crate::error::Result;
use crate::season::Season;

/// Abstraction over a provider of F1 race results (e.g., Jolpica).
#[async_trait::async_trait]
pub trait SeasonApi: Send + Sync {
    /// Returns every result of `season` in ascending round order.
    ///
    /// A season without any race yet yields an empty list.
    async fn race_results(&self, season: Season) -> Result<Vec<RaceResult>>;
}
