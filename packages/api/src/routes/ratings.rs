use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::rating::{
    MyRatingResponse, RatingsResponse, SubmitRatingRequest, SubmitRatingResponse,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ratings/{user_id}", get(get_user_ratings).post(rate_user))
        .route("/api/ratings/{user_id}/my-rating", get(get_my_rating))
}

async fn get_user_ratings(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<Json<RatingsResponse>, ApiError> {
    state
        .rating_service
        .get_ratings_for(&user_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to load ratings for user {}: {}", user_id, e);
            ApiError::from(e)
        })
}

async fn rate_user(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(user_id): Path<String>,
    Json(payload): Json<SubmitRatingRequest>,
) -> Result<Json<SubmitRatingResponse>, ApiError> {
    let overall_score = state
        .rating_service
        .submit_rating(&authenticated_user.user.id, &user_id, &payload)
        .await
        .map_err(|e| {
            error!(
                "Failed to store rating of {} by {}: {}",
                user_id, authenticated_user.user.id, e
            );
            ApiError::from(e)
        })?;
    debug!(
        "Rating of {} by {} stored with overall score {}",
        user_id, authenticated_user.user.id, overall_score
    );
    Ok(Json(SubmitRatingResponse {
        message: "Rating submitted successfully".to_string(),
        overall_score,
    }))
}

async fn get_my_rating(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<Json<MyRatingResponse>, ApiError> {
    state
        .rating_service
        .get_my_rating(&authenticated_user.user.id, &user_id)
        .await
        .map(Json)
        .map_err(ApiError::from)
}
