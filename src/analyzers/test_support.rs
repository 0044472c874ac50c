//! Builders for race results used across the aggregation tests.

use crate::analyzers::types::{ConstructorRef, DriverRef, RaceResult};

/// A result for `driver` (used as id and code) in a generic team.
pub fn entry(round: u32, driver: &str, position_text: &str, points: f64) -> RaceResult {
    entry_for(round, driver, "team", position_text, points)
}

pub fn entry_for(
    round: u32,
    driver: &str,
    constructor: &str,
    position_text: &str,
    points: f64,
) -> RaceResult {
    let status = match position_text {
        "R" => "Retired",
        "D" => "Disqualified",
        "W" => "Withdrew",
        _ => "Finished",
    };

    RaceResult {
        round,
        race_name: format!("Round {round} Grand Prix"),
        driver: DriverRef {
            id: driver.to_string(),
            code: Some(driver.to_string()),
            name: format!("Driver {driver}"),
        },
        constructor: ConstructorRef {
            id: constructor.to_string(),
            name: capitalize(constructor),
        },
        position: position_text.parse().ok(),
        position_text: position_text.to_string(),
        status: status.to_string(),
        points,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
