//! Error types for the F1 stats pipeline.
//!
//! Every fetch or decode failure surfaces as an [`Error`] so the route
//! handlers can map it onto an HTTP status without string matching.

use thiserror::Error;

/// The main error type for season fetching and serving.
#[derive(Error, Debug)]
pub enum Error {
    /// The `season` parameter is missing, malformed or outside the F1 era.
    #[error("invalid season '{input}': {reason}")]
    InvalidSeason {
        /// The raw value the caller supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The upstream API does not know the requested season.
    #[error("season {season} not found upstream")]
    SeasonNotFound {
        /// The season that was requested.
        season: u16,
    },

    /// The upstream API could not be reached or answered with a failure status.
    #[error("upstream unavailable: {message}")]
    UpstreamUnavailable {
        /// Description of the transport failure or status.
        message: String,
    },

    /// The upstream API answered with a body we cannot map into race results.
    #[error("unexpected upstream response: {message}")]
    UpstreamFormat {
        /// Which field or shape was wrong.
        message: String,
    },

    /// Configuration loading or validation failed.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the validation failure.
        message: String,
    },
}

impl Error {
    pub fn invalid_season(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeason {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn upstream_format(message: impl Into<String>) -> Self {
        Self::UpstreamFormat {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidSeason { .. } => "invalid_season",
            Error::SeasonNotFound { .. } => "season_not_found",
            Error::UpstreamUnavailable { .. } => "upstream_unavailable",
            Error::UpstreamFormat { .. } => "upstream_format",
            Error::Config { .. } => "config",
        }
    }

    /// Returns `true` if the caller, not the upstream, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidSeason { .. } | Error::SeasonNotFound { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::upstream_format(err.to_string())
        } else {
            Error::UpstreamUnavailable {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::upstream_format(err.to_string())
    }
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
