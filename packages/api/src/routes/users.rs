use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::auth::responses::MessageResponse;
use shared::models::user::{ProfileResponse, ProfileUser, UpdateUserRequest, UsersResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(get_all_users))
        .route("/api/users/{user_id}", delete(delete_user).put(update_user))
        .route("/api/profile", get(get_profile))
}

async fn get_all_users(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
) -> Result<Json<UsersResponse>, ApiError> {
    state
        .user_service
        .list_users_with_details()
        .await
        .map(|users| Json(UsersResponse { users }))
        .map_err(|e| {
            error!("Failed to list users: {}", e);
            ApiError::from(e)
        })
}

async fn get_profile(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let preferences = state
        .preference_service
        .get_preferences(&authenticated_user.user.id)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(ProfileResponse {
        user: ProfileUser {
            email: authenticated_user.user.email,
            name: authenticated_user.user.name,
            preferences,
        },
    }))
}

/// Admin maintenance endpoint; removal cascades to the user's preferences and
/// to ratings on both sides of the pair.
async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete_user(&user_id).await.map_err(|e| {
        error!("Failed to delete user {}: {}", user_id, e);
        ApiError::from(e)
    })?;
    debug!("User deleted successfully: {}", user_id);
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Admin maintenance endpoint; the only way an email changes after creation.
async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .user_service
        .update_user(&user_id, &payload.email, &payload.name)
        .await
        .map_err(|e| {
            error!("Failed to update user {}: {}", user_id, e);
            ApiError::from(e)
        })?;
    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}
