use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::warn;

/// An [`HttpClient`] wrapper that re-sends requests failing with a transient error.
///
/// Transient means a connect error, a timeout, a `429` or any `5xx`. The
/// request is tried at most `max_retries + 1` times, sleeping
/// `backoff * attempt` between tries. With `max_retries = 0` this is a
/// pass-through.
pub struct Retry<C> {
    pub inner: C,
    pub max_retries: u32,
    pub backoff: Duration,
}

impl<C> Retry<C> {
    pub fn new(inner: C, max_retries: u32, backoff: Duration) -> Self {
        Self {
            inner,
            max_retries,
            backoff,
        }
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

/// Linear backoff that saturates instead of overflowing.
fn delay_for(backoff: Duration, attempt: u32) -> Duration {
    backoff.checked_mul(attempt).unwrap_or(Duration::MAX)
}

#[async_trait]
impl<C: HttpClient> HttpClient for Retry<C> {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        let mut attempt = 0u32;
        let mut pending = req;

        loop {
            // Streaming bodies cannot be cloned; those get a single attempt
            let spare = if attempt < self.max_retries {
                pending.try_clone()
            } else {
                None
            };

            let outcome = self.inner.execute(pending).await;

            let Some(next) = spare else {
                return outcome;
            };

            let transient = match &outcome {
                Ok(resp) => is_transient_status(resp.status()),
                Err(e) => is_transient_error(e),
            };
            if !transient {
                return outcome;
            }

            match &outcome {
                Ok(resp) => {
                    warn!(attempt = attempt + 1, status = %resp.status(), "Transient upstream status, retrying")
                }
                Err(e) => warn!(attempt = attempt + 1, error = %e, "Transient upstream error, retrying"),
            }

            attempt += 1;
            tokio::time::sleep(delay_for(self.backoff, attempt)).await;
            pending = next;
        }
    }
}
