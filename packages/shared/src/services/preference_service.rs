use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::models::position::Position;
use crate::models::preferences::Preferences;
use crate::repositories::preference_repository::PreferenceRepository;
use crate::services::errors::preference_service_errors::PreferenceServiceError;

pub struct PreferenceService {
    repository: Arc<dyn PreferenceRepository + Send + Sync>,
}

impl PreferenceService {
    pub fn new(repository: Arc<dyn PreferenceRepository + Send + Sync>) -> Self {
        PreferenceService { repository }
    }

    /// Upsert of the one preference row a user owns. `created_at` survives
    /// rewrites; `completed` is recomputed from the fields being written.
    pub async fn save_preferences(
        &self,
        user_id: &str,
        position: Position,
        favorite_team: &str,
        picture: Option<String>,
        slogan: Option<String>,
    ) -> Result<Preferences, PreferenceServiceError> {
        let existing = self
            .repository
            .get_preferences(user_id)
            .await
            .map_err(|e| PreferenceServiceError::RepositoryError(e.to_string()))?;
        let created_at = existing.map(|p| p.created_at).unwrap_or_else(Utc::now);

        let mut preferences = Preferences {
            user_id: user_id.to_string(),
            position: Some(position),
            favorite_team: Some(favorite_team.to_string()),
            picture,
            slogan,
            completed: false,
            created_at,
            updated_at: Utc::now(),
        };
        preferences.completed = preferences.is_complete();

        self.repository
            .put_preferences(&preferences)
            .await
            .map_err(|e| PreferenceServiceError::RepositoryError(e.to_string()))?;
        debug!("Saved preferences for user {}", user_id);
        Ok(preferences)
    }

    pub async fn get_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<Preferences>, PreferenceServiceError> {
        self.repository
            .get_preferences(user_id)
            .await
            .map_err(|e| PreferenceServiceError::RepositoryError(e.to_string()))
    }

    /// Authoritative completeness check: recomputed from the stored fields on
    /// every call, never read from the persisted flag.
    pub async fn are_preferences_complete(
        &self,
        user_id: &str,
    ) -> Result<bool, PreferenceServiceError> {
        let preferences = self.get_preferences(user_id).await?;
        Ok(preferences.map_or(false, |p| p.is_complete()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::preference_repository::MockPreferenceRepository;
    use chrono::{Duration, Utc};

    fn stored_preferences(
        position: Option<Position>,
        favorite_team: Option<&str>,
        completed: bool,
    ) -> Preferences {
        Preferences {
            user_id: "user-1".to_string(),
            position,
            favorite_team: favorite_team.map(|t| t.to_string()),
            picture: None,
            slogan: None,
            completed,
            created_at: Utc::now() - Duration::days(30),
            updated_at: Utc::now() - Duration::days(30),
        }
    }

    #[tokio::test]
    async fn test_save_preserves_created_at_and_sets_completed() {
        let existing = stored_preferences(None, None, false);
        let original_created_at = existing.created_at;

        let mut repository = MockPreferenceRepository::new();
        repository.expect_get_preferences().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        repository
            .expect_put_preferences()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = PreferenceService::new(Arc::new(repository));
        let saved = service
            .save_preferences(
                "user-1",
                Position::Midfielder,
                "Rovers",
                Some("data:image/png;base64,AAAA".to_string()),
                Some("Tiki-taka".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(saved.created_at, original_created_at);
        assert!(saved.updated_at > original_created_at);
        assert!(saved.completed);
        assert_eq!(saved.position, Some(Position::Midfielder));
        assert_eq!(saved.favorite_team.as_deref(), Some("Rovers"));
    }

    #[tokio::test]
    async fn test_first_save_creates_row() {
        let mut repository = MockPreferenceRepository::new();
        repository
            .expect_get_preferences()
            .returning(|_| Box::pin(async { Ok(None) }));
        repository
            .expect_put_preferences()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = PreferenceService::new(Arc::new(repository));
        let saved = service
            .save_preferences("user-1", Position::Forward, "Tigers", None, None)
            .await
            .unwrap();

        assert!(saved.completed);
        assert!(saved.picture.is_none());
        assert!(saved.slogan.is_none());
    }

    #[tokio::test]
    async fn test_completeness_is_recomputed_not_read_from_flag() {
        // Row claims completed but has no position: the flag must lose.
        let stale = stored_preferences(None, Some("Tigers"), true);
        let mut repository = MockPreferenceRepository::new();
        repository.expect_get_preferences().returning(move |_| {
            let stale = stale.clone();
            Box::pin(async move { Ok(Some(stale)) })
        });

        let service = PreferenceService::new(Arc::new(repository));
        assert!(!service.are_preferences_complete("user-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_completeness_true_when_both_fields_set() {
        let row = stored_preferences(Some(Position::Defender), Some("United"), false);
        let mut repository = MockPreferenceRepository::new();
        repository.expect_get_preferences().returning(move |_| {
            let row = row.clone();
            Box::pin(async move { Ok(Some(row)) })
        });

        let service = PreferenceService::new(Arc::new(repository));
        assert!(service.are_preferences_complete("user-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_completeness_false_without_row() {
        let mut repository = MockPreferenceRepository::new();
        repository
            .expect_get_preferences()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = PreferenceService::new(Arc::new(repository));
        assert!(!service.are_preferences_complete("user-1").await.unwrap());
    }
}
