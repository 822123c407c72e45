pub mod matchday_repository_errors;
pub mod preference_repository_errors;
pub mod rating_repository_errors;
pub mod user_repository_errors;
