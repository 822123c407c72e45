pub mod auth_service_errors;
pub mod matchday_service_errors;
pub mod preference_service_errors;
pub mod rating_service_errors;
pub mod user_service_errors;
