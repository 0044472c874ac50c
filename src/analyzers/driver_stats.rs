use std::collections::HashMap;

use crate::analyzers::types::{DriverStat, RaceResult};

/// Counts wins, podiums, retirements and entries for every driver.
///
/// Drivers are listed in the order they first appear in `results`.
pub fn compute_driver_stats(results: &[RaceResult]) -> Vec<DriverStat> {
    let mut stats: Vec<DriverStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in results {
        let slot = *index.entry(r.driver.id.as_str()).or_insert_with(|| {
            stats.push(DriverStat {
                driver: r.driver.id.clone(),
                name: r.driver.name.clone(),
                wins: 0,
                podiums: 0,
                retirements: 0,
                races: 0,
            });
            stats.len() - 1
        });

        let s = &mut stats[slot];
        s.races += 1;

        if r.is_win() {
            s.wins += 1;
        }

        if r.is_podium() {
            s.podiums += 1;
        }

        if r.is_retirement() {
            s.retirements += 1;
        }
    }

    stats
}
