//! HTTP error mapping
//!
//! Translates the planner's error taxonomy into status codes and a stable
//! JSON error body. Gate failures never reach this layer; they are normal
//! filtering outcomes inside the planner.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use planner::PlannerError;
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

/// Wrapper turning planner errors into HTTP responses
pub struct ApiError(pub PlannerError);

impl From<PlannerError> for ApiError {
    fn from(error: PlannerError) -> Self {
        ApiError(error)
    }
}

impl From<shared::StoreError> for ApiError {
    fn from(error: shared::StoreError) -> Self {
        ApiError(PlannerError::Store(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            PlannerError::UserNotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PlannerError::NoGoals
            | PlannerError::NoGoalsForPhase { .. }
            | PlannerError::UntrackedRequirement { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY")
            }
            PlannerError::Store(_) => (StatusCode::BAD_GATEWAY, "STORE_FAILURE"),
            PlannerError::Json(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, code, "Request failed");
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            error_code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 400 with the same body shape, for malformed request parameters
pub fn bad_request(message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
        error_code: "INVALID_REQUEST".to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
