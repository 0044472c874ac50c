mod basic;
mod client;
mod retry;

pub use basic::{BasicClient, USER_AGENT};
pub use client::HttpClient;
pub use retry::Retry;

use crate::error::{Error, Result};

/// Issues a `GET` for `url` through `client`.
///
/// Transport failures become [`Error::UpstreamUnavailable`]. The status is
/// left for the caller to interpret.
pub async fn fetch<C: HttpClient + ?Sized>(client: &C, url: &str) -> Result<reqwest::Response> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse()
            .map_err(|e| Error::config(format!("invalid upstream url '{url}': {e}")))?,
    );

    let resp = client.execute(req).await?;
    Ok(resp)
}
