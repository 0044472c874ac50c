use super::client::HttpClient;
use async_trait::async_trait;
use std::time::Duration;

use crate::error::{Error, Result};

/// Sent on every upstream request; the Jolpica mirror asks clients to identify themselves.
pub const USER_AGENT: &str = "f1-stats-explorer";

/// A plain `reqwest` client with the service's timeouts and user agent.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
