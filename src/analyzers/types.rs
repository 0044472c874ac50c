//! Data types shared by the fetcher and the aggregation pipeline.

use serde::{Deserialize, Serialize};

/// Identifies a driver across a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    /// Upstream driver id, e.g. `max_verstappen`. Used as the grouping key.
    pub id: String,
    /// Three-letter code, absent for most pre-2000s drivers.
    pub code: Option<String>,
    pub name: String,
}

/// Identifies a constructor across a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorRef {
    pub id: String,
    pub name: String,
}

/// One driver's result in one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub round: u32,
    pub race_name: String,
    pub driver: DriverRef,
    pub constructor: ConstructorRef,
    /// Numeric finishing position when the driver was classified.
    pub position: Option<u32>,
    /// Raw position text: a number, or `R`, `D`, `E`, `W`, `F`, `N`.
    pub position_text: String,
    pub status: String,
    pub points: f64,
}

impl RaceResult {
    pub fn is_win(&self) -> bool {
        self.classified_position() == Some(1)
    }

    pub fn is_podium(&self) -> bool {
        matches!(self.classified_position(), Some(1..=3))
    }

    /// Whether the driver started but did not finish the race.
    ///
    /// `R` is always a retirement. Drivers classified despite stopping
    /// early (numeric or `N` position text) count when their status is
    /// not a finishing one. Disqualified, excluded, withdrawn and
    /// non-qualified entries never count.
    pub fn is_retirement(&self) -> bool {
        match self.position_text.as_str() {
            "R" => true,
            "D" | "E" | "W" | "F" => false,
            _ => !is_finishing_status(&self.status),
        }
    }

    fn classified_position(&self) -> Option<u32> {
        if self.position_text.parse::<u32>().is_ok() {
            self.position
        } else {
            None
        }
    }
}

/// `Finished`, `Lapped` and the `+N Lap(s)` family.
fn is_finishing_status(status: &str) -> bool {
    let status = status.trim();
    status.is_empty()
        || status == "Finished"
        || status == "Lapped"
        || (status.starts_with('+') && status.contains("Lap"))
}

/// Which entity a standings table is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingEntity {
    Driver,
    Constructor,
}

/// A ranked row of either standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub id: String,
    pub code: Option<String>,
    pub name: String,
    pub points: f64,
    pub rank: u32,
}

/// Driver championship row, as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStanding {
    pub driver: String,
    pub code: Option<String>,
    pub name: String,
    pub points: f64,
    pub rank: u32,
}

impl From<Standing> for DriverStanding {
    fn from(s: Standing) -> Self {
        DriverStanding {
            driver: s.id,
            code: s.code,
            name: s.name,
            points: s.points,
            rank: s.rank,
        }
    }
}

/// Constructor championship row, as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorStanding {
    pub constructor: String,
    pub name: String,
    pub points: f64,
    pub rank: u32,
}

impl From<Standing> for ConstructorStanding {
    fn from(s: Standing) -> Self {
        ConstructorStanding {
            constructor: s.id,
            name: s.name,
            points: s.points,
            rank: s.rank,
        }
    }
}

/// Cumulative points of one driver after one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub round: u32,
    pub driver: String,
    pub cumulative_points: f64,
}

/// Season counters for one driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStat {
    pub driver: String,
    pub name: String,
    pub wins: u32,
    pub podiums: u32,
    pub retirements: u32,
    pub races: u32,
}
