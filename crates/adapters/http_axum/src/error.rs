//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::RosterError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`RosterError`] to a `500` response; details stay in the log.
///
/// Absent records never reach this type: handlers answer `404` themselves.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let RosterError::Storage(err) = &self.0;
        tracing::error!(error = %err, "storage error");

        let body = ErrorBody {
            error: "internal server error",
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
