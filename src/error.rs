use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::calculator::InvalidInputError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A submitted field is not numeric
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut error = json!({
            "message": self.to_string(),
            "type": error_type_name(&self),
        });
        if let Self::InvalidInput(err) = &self {
            error["field"] = json!(err.field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidInput(_) => "invalid_input",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError(format!("JSON error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}
