pub mod auth_service;
pub mod errors;
pub mod matchday_service;
pub mod password;
pub mod preference_service;
pub mod rating_service;
pub mod user_service;
