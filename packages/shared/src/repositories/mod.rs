pub mod errors;
pub mod matchday_repository;
pub mod preference_repository;
pub mod rating_repository;
pub mod user_repository;
