//! Runtime configuration.
//!
//! Settings come from environment variables (a `.env` file is loaded by the
//! binary first) and can be overridden by command-line flags.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::infra::jolpica::{DEFAULT_BASE_URL, MAX_PAGE_SIZE};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/f1_stats_explorer.log";
pub const MAX_RETRY_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub page_size: u32,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            page_size: MAX_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back
    /// to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("F1_API_BASE_URL").unwrap_or(defaults.api_base_url);

        let bind_addr = match lookup("F1_BIND_ADDR") {
            Some(raw) => parse_bind_addr(&raw)?,
            None => defaults.bind_addr,
        };

        let page_size = parse_or("F1_PAGE_SIZE", &lookup, defaults.page_size)?;
        let timeout = parse_or("F1_HTTP_TIMEOUT_SECS", &lookup, defaults.timeout.as_secs())?;
        let connect_timeout = parse_or(
            "F1_CONNECT_TIMEOUT_SECS",
            &lookup,
            defaults.connect_timeout.as_secs(),
        )?;
        let max_retries = parse_or("F1_MAX_RETRIES", &lookup, defaults.max_retries)?;
        let retry_backoff = parse_or(
            "F1_RETRY_BACKOFF_MS",
            &lookup,
            defaults.retry_backoff.as_millis() as u64,
        )?;

        let config = Self {
            api_base_url,
            bind_addr,
            page_size,
            timeout: Duration::from_secs(timeout),
            connect_timeout: Duration::from_secs(connect_timeout),
            max_retries,
            retry_backoff: Duration::from_millis(retry_backoff),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > 1000 {
            return Err(Error::config(format!(
                "page size must be between 1 and 1000, got {}",
                self.page_size
            )));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(Error::config(format!(
                "API base url must be http(s), got '{}'",
                self.api_base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("HTTP timeout must be positive"));
        }
        if self.retry_backoff > MAX_RETRY_BACKOFF {
            return Err(Error::config(format!(
                "retry backoff must be at most {}ms, got {}ms",
                MAX_RETRY_BACKOFF.as_millis(),
                self.retry_backoff.as_millis()
            )));
        }
        Ok(())
    }
}

pub fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim()
        .parse()
        .map_err(|e| Error::config(format!("invalid bind address '{raw}': {e}")))
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::config(format!("{key}='{raw}': {e}"))),
        None => Ok(default),
    }
}
