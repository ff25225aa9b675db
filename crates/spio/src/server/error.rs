use axum::{
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures reported as HTTP errors rather than `success: false` bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("Invalid API key")]
    InvalidCredentials,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));

        match self {
            ApiError::MissingCredentials | ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, "Bearer")],
                body,
            )
                .into_response(),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, body).into_response(),
        }
    }
}
