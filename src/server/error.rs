use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::errors::AppError;

/// Failure of `POST /api/feedback`: `{"success": false, "error": ...}`.
#[derive(Debug)]
pub struct SubmitError(pub AppError);

/// Failure of `GET /api/feedbacks`: `{"error": ...}`.
#[derive(Debug)]
pub struct ListError(pub AppError);

impl From<AppError> for SubmitError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AppError> for ListError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let body = json!({ "success": false, "error": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
