use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::auth::requests::{LoginRequest, RegisterRequest};
use shared::models::auth::responses::{LoginResponse, MessageResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let email = payload.email.unwrap_or_default();
    state
        .user_service
        .register(
            &email,
            &payload.password.unwrap_or_default(),
            &payload.name.unwrap_or_default(),
        )
        .await
        .map_err(|e| {
            error!("Failed to register user {}: {}", email, e);
            ApiError::from(e)
        })?;
    debug!("User registered successfully: {}", email);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = payload.email.unwrap_or_default();
    state
        .auth_service
        .authenticate_user(&email, &payload.password.unwrap_or_default())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", email, e);
            ApiError::from(e)
        })
}
