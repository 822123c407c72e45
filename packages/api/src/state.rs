use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::matchday_service::MatchdayService;
use shared::services::preference_service::PreferenceService;
use shared::services::rating_service::RatingService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub preference_service: Arc<PreferenceService>,
    pub rating_service: Arc<RatingService>,
    pub matchday_service: Arc<MatchdayService>,
}
