//! Output formatting for one-shot `fetch` runs.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", to_pretty_json(value)?);
    Ok(())
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
