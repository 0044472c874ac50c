//! Serde mapping of the Ergast-compatible `results.json` envelope.
//!
//! Every number arrives as a string; conversion into [`RaceResult`] is
//! where malformed values are rejected.

use serde::Deserialize;

use crate::analyzers::types::{ConstructorRef, DriverRef, RaceResult};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Deserialize)]
pub struct MrData {
    pub offset: String,
    pub total: String,
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<WireRace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRace {
    pub round: String,
    pub race_name: String,
    #[serde(rename = "Results", default)]
    pub results: Vec<WireResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResult {
    pub position: Option<String>,
    pub position_text: String,
    pub points: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "Driver")]
    pub driver: WireDriver,
    #[serde(rename = "Constructor")]
    pub constructor: WireConstructor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDriver {
    pub driver_id: String,
    pub code: Option<String>,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConstructor {
    pub constructor_id: String,
    pub name: String,
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::upstream_format(format!("field '{field}' is not a number: '{value}'")))
}

impl MrData {
    pub fn total(&self) -> Result<usize> {
        parse_number("total", &self.total)
    }

    pub fn offset(&self) -> Result<usize> {
        parse_number("offset", &self.offset)
    }

    /// Number of result rows on this page, which is what `limit`/`offset` count.
    pub fn row_count(&self) -> usize {
        self.race_table.races.iter().map(|r| r.results.len()).sum()
    }
}

impl WireRace {
    pub fn into_results(self) -> Result<Vec<RaceResult>> {
        let round: u32 = parse_number("round", &self.round)?;
        let race_name = self.race_name;

        self.results
            .into_iter()
            .map(|r| -> Result<RaceResult> {
                let points: f64 = parse_number("points", &r.points)?;
                let position = r.position.as_deref().and_then(|p| p.trim().parse().ok());
                let name = format!("{} {}", r.driver.given_name, r.driver.family_name)
                    .trim()
                    .to_string();

                Ok(RaceResult {
                    round,
                    race_name: race_name.clone(),
                    driver: DriverRef {
                        id: r.driver.driver_id,
                        code: r.driver.code,
                        name,
                    },
                    constructor: ConstructorRef {
                        id: r.constructor.constructor_id,
                        name: r.constructor.name,
                    },
                    position,
                    position_text: r.position_text,
                    status: r.status,
                    points,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "MRData": {
            "series": "f1",
            "limit": "30",
            "offset": "0",
            "total": "2",
            "RaceTable": {
                "season": "2021",
                "Races": [{
                    "season": "2021",
                    "round": "1",
                    "raceName": "Bahrain Grand Prix",
                    "date": "2021-03-28",
                    "Results": [
                        {
                            "number": "44", "position": "1", "positionText": "1", "points": "25",
                            "Driver": {"driverId": "hamilton", "code": "HAM", "givenName": "Lewis", "familyName": "Hamilton"},
                            "Constructor": {"constructorId": "mercedes", "name": "Mercedes"},
                            "grid": "2", "laps": "56", "status": "Finished"
                        },
                        {
                            "number": "10", "position": "17", "positionText": "R", "points": "0",
                            "Driver": {"driverId": "gasly", "code": "GAS", "givenName": "Pierre", "familyName": "Gasly"},
                            "Constructor": {"constructorId": "alphatauri", "name": "AlphaTauri"},
                            "grid": "5", "laps": "52", "status": "Retired"
                        }
                    ]
                }]
            }
        }
    }"#;

    #[test]
    fn test_parse_page() {
        let envelope: ResultsEnvelope = serde_json::from_str(PAGE).unwrap();
        let data = envelope.mr_data;

        assert_eq!(data.total().unwrap(), 2);
        assert_eq!(data.offset().unwrap(), 0);
        assert_eq!(data.row_count(), 2);

        let race = data.race_table.races.into_iter().next().unwrap();
        let results = race.into_results().unwrap();

        assert_eq!(results[0].round, 1);
        assert_eq!(results[0].driver.id, "hamilton");
        assert_eq!(results[0].driver.name, "Lewis Hamilton");
        assert_eq!(results[0].points, 25.0);
        assert!(results[0].is_win());

        assert_eq!(results[1].position_text, "R");
        assert!(results[1].is_retirement());
        assert_eq!(results[1].constructor.name, "AlphaTauri");
    }

    #[test]
    fn test_bad_points_is_format_error() {
        let race = WireRace {
            round: "3".to_string(),
            race_name: "Portuguese Grand Prix".to_string(),
            results: vec![WireResult {
                position: Some("1".to_string()),
                position_text: "1".to_string(),
                points: "lots".to_string(),
                status: "Finished".to_string(),
                driver: WireDriver {
                    driver_id: "hamilton".to_string(),
                    code: None,
                    given_name: "Lewis".to_string(),
                    family_name: "Hamilton".to_string(),
                },
                constructor: WireConstructor {
                    constructor_id: "mercedes".to_string(),
                    name: "Mercedes".to_string(),
                },
            }],
        };

        let err = race.into_results().unwrap_err();
        assert_eq!(err.code(), "upstream_format");
    }

    #[test]
    fn test_missing_race_table_is_rejected() {
        let body = r#"{"MRData": {"limit": "30", "offset": "0", "total": "0"}}"#;
        assert!(serde_json::from_str::<ResultsEnvelope>(body).is_err());
    }

    #[test]
    fn test_empty_season_page() {
        let body = r#"{"MRData": {"limit": "30", "offset": "0", "total": "0",
            "RaceTable": {"season": "2027", "Races": []}}}"#;
        let envelope: ResultsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.mr_data.row_count(), 0);
        assert_eq!(envelope.mr_data.total().unwrap(), 0);
    }
}
