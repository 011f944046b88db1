use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use models::io::ErrorOutput;
use service::errors::ServiceError;

/// The single error response of the API: `400 {"detail": ...}`.
///
/// Collaborator failures of every kind and malformed requests all end up here;
/// the detail is the failing component's own message.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorOutput { detail: self.0 })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        warn!(kind = e.kind(), error = %e, "request failed");
        ApiError(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        warn!(error = %r.body_text(), "invalid request body");
        ApiError(r.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        warn!(error = %r.body_text(), "invalid path parameter");
        ApiError(r.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        warn!(error = %r.body_text(), "invalid query parameter");
        ApiError(r.body_text())
    }
}
