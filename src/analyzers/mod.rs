//! Season aggregation.
//!
//! Pure transforms over a season's [`types::RaceResult`] rows: standings
//! tables, the cumulative points timeline, and per-driver counters.

pub mod driver_stats;
pub mod standings;
pub mod timeline;
pub mod types;
pub mod utility;

#[cfg(test)]
pub(crate) mod test_support;

pub use driver_stats::compute_driver_stats;
pub use standings::{compute_standings, constructor_standings, driver_standings};
pub use timeline::compute_points_timeline;
