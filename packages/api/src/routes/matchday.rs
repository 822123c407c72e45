use axum::{extract::State, routing::get, Json, Router};
use lambda_http::tracing::error;

use crate::{error::ApiError, state::AppState};
use shared::models::auth::responses::MessageResponse;
use shared::models::matchday::{MatchdayInfo, MatchdayResponse};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/matchday", get(get_matchday).put(update_matchday))
}

async fn get_matchday(
    State(state): State<AppState>,
) -> Result<Json<MatchdayResponse>, ApiError> {
    state
        .matchday_service
        .get_matchday()
        .await
        .map(|matchday| Json(MatchdayResponse { matchday }))
        .map_err(|e| {
            error!("Failed to fetch matchday info: {}", e);
            ApiError::from(e)
        })
}

async fn update_matchday(
    State(state): State<AppState>,
    Json(payload): Json<MatchdayInfo>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .matchday_service
        .update_matchday(&payload)
        .await
        .map_err(|e| {
            error!("Failed to update matchday info: {}", e);
            ApiError::from(e)
        })?;
    Ok(Json(MessageResponse {
        message: "Matchday information updated successfully".to_string(),
    }))
}
