use chrono::{Datelike, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// First year of the FIA World Championship.
pub const FIRST_SEASON: u16 = 1950;

/// A validated championship year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Season(u16);

impl Season {
    /// Parses `input` against the current UTC year.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_current_year(input, Utc::now().year())
    }

    /// Parses `input`, accepting years from 1950 up to `current_year + 1`.
    pub fn parse_with_current_year(input: &str, current_year: i32) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_season(input, "season is required"));
        }
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_season(input, "expected a four-digit year"));
        }
        let year: i32 = trimmed
            .parse()
            .map_err(|_| Error::invalid_season(input, "expected a four-digit year"))?;

        let last = current_year + 1;
        if year < i32::from(FIRST_SEASON) || year > last {
            return Err(Error::invalid_season(
                input,
                format!("expected a year between {FIRST_SEASON} and {last}"),
            ));
        }

        Ok(Season(year as u16))
    }

    pub fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_year() {
        let season = Season::parse_with_current_year("2021", 2026).unwrap();
        assert_eq!(season.year(), 2021);
        assert_eq!(season.to_string(), "2021");
    }

    #[test]
    fn test_parse_bounds() {
        assert!(Season::parse_with_current_year("1950", 2026).is_ok());
        assert!(Season::parse_with_current_year("2027", 2026).is_ok());
        assert!(Season::parse_with_current_year("1949", 2026).is_err());
        assert!(Season::parse_with_current_year("2028", 2026).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "  ", "abcd", "20.5", "-2021", "+2021", "02021", "202"] {
            let err = Season::parse_with_current_year(input, 2026).unwrap_err();
            assert!(matches!(err, Error::InvalidSeason { .. }), "{input:?}");
        }
    }

    #[test]
    fn test_parse_far_future_is_invalid() {
        let err = Season::parse("2999").unwrap_err();
        assert_eq!(err.code(), "invalid_season");
        let err = Season::parse("1940").unwrap_err();
        assert_eq!(err.code(), "invalid_season");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let season = Season::parse_with_current_year(" 2008 ", 2026).unwrap();
        assert_eq!(season.year(), 2008);
    }
}
