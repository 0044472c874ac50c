use async_trait::async_trait;
use reqwest::{Request, Response};
use std::sync::Arc;

/// Executes outbound requests to the F1 data API.
///
/// Wrappers such as [`super::Retry`] implement this trait around an inner
/// client, so behaviour is stacked rather than configured in one place.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        (**self).execute(req).await
    }
}
