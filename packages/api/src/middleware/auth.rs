use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::ApiError, state::AppState};
use shared::models::user::User;
use shared::services::errors::auth_service_errors::AuthServiceError;

/// The caller's resolved identity. Extracting this gates the handler: the
/// bearer token is verified and its subject resolved to the current account
/// before the handler body runs, and the whole record is passed in explicitly.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or(ApiError::MissingToken)?
            .to_str()
            .map_err(|_| {
                ApiError::AuthService(AuthServiceError::ValidationError(
                    "Invalid header format".to_string(),
                ))
            })?;

        // The "Bearer " prefix is optional; a bare token is accepted too.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let user = state
            .auth_service
            .resolve_token(token)
            .await
            .map_err(ApiError::from)?;

        Ok(AuthenticatedUser { user })
    }
}
