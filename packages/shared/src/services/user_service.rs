use std::sync::Arc;

use tracing::debug;

use crate::models::user::{User, UserWithDetails};
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::preference_repository::PreferenceRepository;
use crate::repositories::rating_repository::RatingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::services::password;

pub struct UserService {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    preference_repository: Arc<dyn PreferenceRepository + Send + Sync>,
    rating_repository: Arc<dyn RatingRepository + Send + Sync>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        preference_repository: Arc<dyn PreferenceRepository + Send + Sync>,
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    ) -> Self {
        UserService {
            user_repository,
            preference_repository,
            rating_repository,
        }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, UserServiceError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(UserServiceError::ValidationError(
                "All fields are required".to_string(),
            ));
        }
        if self
            .user_repository
            .email_exists(email)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Err(UserServiceError::UserAlreadyExists);
        }
        let hashed_password = password::hash_password(password)
            .map_err(|e| UserServiceError::PasswordHashError(e.to_string()))?;
        let user = User::new(email.to_string(), hashed_password, name.to_string());
        self.user_repository
            .create_user(&user)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserServiceError> {
        if user_id.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        self.user_repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, UserServiceError> {
        if email.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Email cannot be empty".to_string(),
            ));
        }
        self.user_repository
            .get_user_by_email(email)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Admin override: the only path that may change an email after creation.
    pub async fn update_user(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
    ) -> Result<User, UserServiceError> {
        if email.is_empty() || name.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Email and name are required".to_string(),
            ));
        }
        let mut user = self.get_user_by_id(user_id).await?;
        user.email = email.to_string();
        user.name = name.to_string();
        self.user_repository
            .update_user(&user)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        Ok(user)
    }

    /// Hard delete. The store has no foreign keys, so the cascade to the
    /// preference row and to ratings on both sides of the pair happens here.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), UserServiceError> {
        if user_id.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        self.user_repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;
        self.preference_repository
            .delete_preferences(user_id)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;

        let received = self
            .rating_repository
            .get_ratings_for_user(user_id)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        let authored = self
            .rating_repository
            .get_ratings_by_rater(user_id)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        debug!(
            "Cascading delete for user {}: {} received, {} authored ratings",
            user_id,
            received.len(),
            authored.len()
        );
        for rating in received.iter().chain(authored.iter()) {
            self.rating_repository
                .delete_rating(&rating.rated_user_id, &rating.rater_user_id)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        }
        Ok(())
    }

    /// Roster view: every user with their preference fields and the aggregate
    /// of ratings received. The average here truncates, matching the view the
    /// clients already render.
    pub async fn list_users_with_details(&self) -> Result<Vec<UserWithDetails>, UserServiceError> {
        let users = self
            .user_repository
            .list_users()
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;

        let mut details = Vec::with_capacity(users.len());
        for user in users {
            let preferences = self
                .preference_repository
                .get_preferences(&user.id)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
            let ratings = self
                .rating_repository
                .get_ratings_for_user(&user.id)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;

            let rating_count = ratings.len();
            let average_rating = if rating_count == 0 {
                0
            } else {
                ratings.iter().map(|r| r.overall_score).sum::<i32>() / rating_count as i32
            };

            let (position, favorite_team, picture, slogan) = match &preferences {
                Some(prefs) => (
                    prefs
                        .position
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "Not set".to_string()),
                    prefs
                        .favorite_team
                        .clone()
                        .filter(|team| !team.is_empty())
                        .unwrap_or_else(|| "Not set".to_string()),
                    prefs.picture.clone().unwrap_or_default(),
                    prefs
                        .slogan
                        .clone()
                        .filter(|slogan| !slogan.is_empty())
                        .unwrap_or_else(|| "No slogan yet".to_string()),
                ),
                None => (
                    "Not set".to_string(),
                    "Not set".to_string(),
                    String::new(),
                    "No slogan yet".to_string(),
                ),
            };

            details.push(UserWithDetails {
                id: user.id,
                email: user.email,
                name: user.name,
                created_at: user.created_at,
                position,
                favorite_team,
                picture,
                slogan,
                average_rating,
                rating_count,
            });
        }
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::Preferences;
    use crate::models::position::Position;
    use crate::models::rating::Rating;
    use crate::repositories::preference_repository::MockPreferenceRepository;
    use crate::repositories::rating_repository::MockRatingRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::Utc;

    fn service(
        user_repo: MockUserRepository,
        preference_repo: MockPreferenceRepository,
        rating_repo: MockRatingRepository,
    ) -> UserService {
        UserService::new(
            Arc::new(user_repo),
            Arc::new(preference_repo),
            Arc::new(rating_repo),
        )
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let service = service(
            MockUserRepository::new(),
            MockPreferenceRepository::new(),
            MockRatingRepository::new(),
        );

        let result = service.register("", "password", "Name").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::ValidationError(_)
        ));

        let result = service.register("a@b.c", "", "Name").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::ValidationError(_)
        ));

        let result = service.register("a@b.c", "password", "").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_email_exists()
            .returning(|_| Box::pin(async { Ok(true) }));

        let service = service(
            user_repo,
            MockPreferenceRepository::new(),
            MockRatingRepository::new(),
        );

        let result = service.register("taken@example.com", "password", "Name").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::UserAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_register_stores_salted_hash_not_plaintext() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_email_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        user_repo
            .expect_create_user()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = service(
            user_repo,
            MockPreferenceRepository::new(),
            MockRatingRepository::new(),
        );

        let user = service
            .register("new@example.com", "hunter22", "New User")
            .await
            .unwrap();

        assert_ne!(user.password, "hunter22");
        assert!(password::verify_password("hunter22", &user.password));
        assert!(!password::verify_password("hunter23", &user.password));
    }

    #[tokio::test]
    async fn test_delete_user_cascades_to_preferences_and_both_rating_sides() {
        let user_id = "user-1";

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_delete_user()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let mut preference_repo = MockPreferenceRepository::new();
        preference_repo
            .expect_delete_preferences()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let received = Rating::new(user_id, "rater-1", [50; 6], 50);
        let authored = Rating::new("other-user", user_id, [60; 6], 60);

        let mut rating_repo = MockRatingRepository::new();
        rating_repo.expect_get_ratings_for_user().returning({
            let received = received.clone();
            move |_| {
                let ratings = vec![received.clone()];
                Box::pin(async move { Ok(ratings) })
            }
        });
        rating_repo.expect_get_ratings_by_rater().returning({
            let authored = authored.clone();
            move |_| {
                let ratings = vec![authored.clone()];
                Box::pin(async move { Ok(ratings) })
            }
        });
        rating_repo
            .expect_delete_rating()
            .times(2)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let service = service(user_repo, preference_repo, rating_repo);
        service.delete_user(user_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_delete_user()
            .returning(|_| Box::pin(async { Err(UserRepositoryError::NotFound) }));

        let service = service(
            user_repo,
            MockPreferenceRepository::new(),
            MockRatingRepository::new(),
        );

        let result = service.delete_user("ghost").await;
        assert!(matches!(result.unwrap_err(), UserServiceError::UserNotFound));
    }

    #[tokio::test]
    async fn test_list_users_fills_display_defaults_and_truncated_average() {
        let unrated = User::new("plain@example.com".to_string(), "hash".to_string(), "Plain".to_string());
        let rated = User::new("rated@example.com".to_string(), "hash".to_string(), "Rated".to_string());
        let rated_id = rated.id.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_list_users().returning({
            let users = vec![unrated.clone(), rated.clone()];
            move || {
                let users = users.clone();
                Box::pin(async move { Ok(users) })
            }
        });

        let mut preference_repo = MockPreferenceRepository::new();
        preference_repo.expect_get_preferences().returning({
            let rated_id = rated_id.clone();
            move |user_id| {
                let preferences = if user_id == rated_id {
                    Some(Preferences {
                        user_id: rated_id.clone(),
                        position: Some(Position::Forward),
                        favorite_team: Some("Tigers".to_string()),
                        picture: None,
                        slogan: None,
                        completed: true,
                        created_at: Utc::now(),
                        updated_at: Utc::now(),
                    })
                } else {
                    None
                };
                Box::pin(async move { Ok(preferences) })
            }
        });

        let mut rating_repo = MockRatingRepository::new();
        rating_repo.expect_get_ratings_for_user().returning({
            let rated_id = rated_id.clone();
            move |user_id| {
                let ratings = if user_id == rated_id {
                    vec![
                        Rating::new(user_id, "rater-1", [80; 6], 80),
                        Rating::new(user_id, "rater-2", [75; 6], 75),
                    ]
                } else {
                    Vec::new()
                };
                Box::pin(async move { Ok(ratings) })
            }
        });

        let service = service(user_repo, preference_repo, rating_repo);
        let details = service.list_users_with_details().await.unwrap();
        assert_eq!(details.len(), 2);

        let plain = details.iter().find(|d| d.name == "Plain").unwrap();
        assert_eq!(plain.position, "Not set");
        assert_eq!(plain.favorite_team, "Not set");
        assert_eq!(plain.slogan, "No slogan yet");
        assert_eq!(plain.picture, "");
        assert_eq!(plain.average_rating, 0);
        assert_eq!(plain.rating_count, 0);

        // (80 + 75) / 2 = 77.5, truncated to 77 in the roster view.
        let rated = details.iter().find(|d| d.name == "Rated").unwrap();
        assert_eq!(rated.position, "Forward");
        assert_eq!(rated.favorite_team, "Tigers");
        assert_eq!(rated.average_rating, 77);
        assert_eq!(rated.rating_count, 2);
    }
}
