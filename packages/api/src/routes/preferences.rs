use axum::{extract::State, routing::get, Json, Router};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::position::Position;
use shared::models::preferences::{
    PreferencesCheckResponse, PreferencesResponse, SavePreferencesResponse,
    UpdatePreferencesRequest, MAX_PICTURE_CHARS,
};
use shared::services::errors::preference_service_errors::PreferenceServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/preferences", get(get_preferences).post(save_preferences))
        .route("/api/preferences/check", get(check_preferences))
}

async fn get_preferences(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<PreferencesResponse>, ApiError> {
    state
        .preference_service
        .get_preferences(&authenticated_user.user.id)
        .await
        .map(|preferences| Json(PreferencesResponse { preferences }))
        .map_err(|e| {
            error!(
                "Failed to load preferences for user {}: {}",
                authenticated_user.user.id, e
            );
            ApiError::from(e)
        })
}

async fn save_preferences(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<UpdatePreferencesRequest>,
) -> Result<Json<SavePreferencesResponse>, ApiError> {
    let position_raw = payload.position.as_deref().unwrap_or("");
    let favorite_team = payload.favorite_team.as_deref().unwrap_or("");
    if position_raw.is_empty() || favorite_team.is_empty() {
        return Err(ApiError::PreferenceService(
            PreferenceServiceError::ValidationError(
                "Position and Favorite Team are required".to_string(),
            ),
        ));
    }

    if let Some(picture) = &payload.picture {
        if picture.len() > MAX_PICTURE_CHARS {
            return Err(ApiError::PreferenceService(
                PreferenceServiceError::ValidationError("Image file too large".to_string()),
            ));
        }
    }

    let position: Position = position_raw.parse().map_err(|_| {
        ApiError::PreferenceService(PreferenceServiceError::ValidationError(
            "Invalid position".to_string(),
        ))
    })?;

    let preferences = state
        .preference_service
        .save_preferences(
            &authenticated_user.user.id,
            position,
            favorite_team,
            payload.picture,
            payload.slogan,
        )
        .await
        .map_err(|e| {
            error!(
                "Failed to save preferences for user {}: {}",
                authenticated_user.user.id, e
            );
            ApiError::from(e)
        })?;

    debug!(
        "Preferences saved for user {}",
        authenticated_user.user.id
    );
    Ok(Json(SavePreferencesResponse {
        message: "Preferences saved successfully".to_string(),
        preferences: Some(preferences),
    }))
}

async fn check_preferences(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<PreferencesCheckResponse>, ApiError> {
    state
        .preference_service
        .are_preferences_complete(&authenticated_user.user.id)
        .await
        .map(|preferences_complete| {
            Json(PreferencesCheckResponse {
                preferences_complete,
            })
        })
        .map_err(ApiError::from)
}
