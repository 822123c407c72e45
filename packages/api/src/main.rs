use axum::{routing::get, Router};
use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use shared::repositories::matchday_repository::DynamoDbMatchdayRepository;
use shared::repositories::preference_repository::DynamoDbPreferenceRepository;
use shared::repositories::rating_repository::DynamoDbRatingRepository;
use shared::repositories::user_repository::DynamoDbUserRepository;
use shared::services::auth_service::AuthService;
use shared::services::matchday_service::MatchdayService;
use shared::services::preference_service::PreferenceService;
use shared::services::rating_service::RatingService;
use shared::services::user_service::UserService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    // Set up repositories and services
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let user_repository = Arc::new(DynamoDbUserRepository::new(client.clone()));
    let preference_repository = Arc::new(DynamoDbPreferenceRepository::new(client.clone()));
    let rating_repository = Arc::new(DynamoDbRatingRepository::new(client.clone()));
    let matchday_repository = Arc::new(DynamoDbMatchdayRepository::new(client.clone()));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        preference_repository.clone(),
        rating_repository.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(user_service.clone()));
    let preference_service = Arc::new(PreferenceService::new(preference_repository.clone()));
    let rating_service = Arc::new(RatingService::new(
        rating_repository,
        preference_repository,
        user_repository,
    ));
    let matchday_service = Arc::new(MatchdayService::new(matchday_repository));

    let app_state = state::AppState {
        auth_service,
        user_service,
        preference_service,
        rating_service,
        matchday_service,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::auth::routes())
        .merge(routes::preferences::routes())
        .merge(routes::ratings::routes())
        .merge(routes::users::routes())
        .merge(routes::matchday::routes())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}
