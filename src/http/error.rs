use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use crate::error::Error;

/// Wraps a pipeline [`Error`] so handlers can return it directly.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

#[must_use]
pub fn error_status(err: &Error) -> StatusCode {
    match err {
        Error::InvalidSeason { .. } => StatusCode::BAD_REQUEST,
        Error::SeasonNotFound { .. } => StatusCode::NOT_FOUND,
        Error::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        Error::UpstreamFormat { .. } => StatusCode::BAD_GATEWAY,
        Error::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = error_status(&self.0);
        if self.0.is_client_error() {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        } else {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.0.code(),
                "message": self.0.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
