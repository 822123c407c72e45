use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use shared::models::auth::responses::ErrorResponse;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, matchday_service_errors::MatchdayServiceError,
    preference_service_errors::PreferenceServiceError, rating_service_errors::RatingServiceError,
    user_service_errors::UserServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    UserService(UserServiceError),
    AuthService(AuthServiceError),
    PreferenceService(PreferenceServiceError),
    RatingService(RatingServiceError),
    MatchdayService(MatchdayServiceError),
    MissingToken,
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<PreferenceServiceError> for ApiError {
    fn from(error: PreferenceServiceError) -> Self {
        ApiError::PreferenceService(error)
    }
}

impl From<RatingServiceError> for ApiError {
    fn from(error: RatingServiceError) -> Self {
        ApiError::RatingService(error)
    }
}

impl From<MatchdayServiceError> for ApiError {
    fn from(error: MatchdayServiceError) -> Self {
        ApiError::MatchdayService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Duplicate registration is a plain 400 on this API, the client
            // renders the message inline on the form.
            ApiError::UserService(UserServiceError::UserAlreadyExists) => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::UserService(UserServiceError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            ApiError::UserService(UserServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::UserService(
                err @ (UserServiceError::RepositoryError(_)
                | UserServiceError::PasswordHashError(_)),
            ) => internal(err),

            ApiError::AuthService(AuthServiceError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::AuthService(AuthServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::AuthService(
                AuthServiceError::InvalidToken | AuthServiceError::ExpiredToken,
            ) => (StatusCode::UNAUTHORIZED, "Token is invalid".to_string()),
            ApiError::AuthService(
                err @ (AuthServiceError::JwtError(_) | AuthServiceError::UserServiceError(_)),
            ) => internal(err),

            ApiError::PreferenceService(PreferenceServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::PreferenceService(err @ PreferenceServiceError::RepositoryError(_)) => {
                internal(err)
            }

            ApiError::RatingService(
                err @ (RatingServiceError::SelfRating
                | RatingServiceError::NoPosition
                | RatingServiceError::MissingSkill(_)
                | RatingServiceError::SkillOutOfRange(_)),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::RatingService(err @ RatingServiceError::RepositoryError(_)) => internal(err),

            ApiError::MatchdayService(err @ MatchdayServiceError::RepositoryError(_)) => {
                internal(err)
            }

            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, "Token is missing".to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Unexpected failures become a generic 500; the underlying detail goes to the
/// log, not the response body.
fn internal(err: &dyn std::fmt::Display) -> (StatusCode, String) {
    error!("Internal error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}
