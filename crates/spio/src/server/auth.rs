use super::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use spio_core::auth::{check_bearer, BearerCheck};
use std::sync::Arc;

/// Extractor that rejects the request unless it carries the API key.
///
/// Runs before the body is read, so a bad credential is answered with 401
/// even when the body is malformed.
pub struct Authorized;

impl FromRequestParts<Arc<AppState>> for Authorized {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match check_bearer(header, &state.config.api_key) {
            BearerCheck::Authorized => Ok(Authorized),
            BearerCheck::Missing => Err(ApiError::MissingCredentials),
            BearerCheck::Invalid => {
                log::warn!("Rejected request to {} with invalid API key", parts.uri.path());
                Err(ApiError::InvalidCredentials)
            }
        }
    }
}
