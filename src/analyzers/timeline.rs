use std::collections::HashMap;

use crate::analyzers::types::{RaceResult, TimelinePoint};
use crate::analyzers::utility::sorted_by_round;

/// Builds the race-by-race cumulative points of every driver.
///
/// Each round emits one row for every driver seen so far, so drivers who
/// skip a race keep a flat line instead of disappearing from the chart.
pub fn compute_points_timeline(results: &[RaceResult]) -> Vec<TimelinePoint> {
    let sorted = sorted_by_round(results);

    let mut drivers: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut timeline = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let round = sorted[i].round;

        while i < sorted.len() && sorted[i].round == round {
            let r = sorted[i];
            let id = r.driver.id.as_str();
            let total = totals.entry(id).or_insert_with(|| {
                drivers.push(id);
                0.0
            });
            *total += r.points;
            i += 1;
        }

        timeline.extend(drivers.iter().map(|&driver| TimelinePoint {
            round,
            driver: driver.to_string(),
            cumulative_points: totals[driver],
        }));
    }

    timeline
}
