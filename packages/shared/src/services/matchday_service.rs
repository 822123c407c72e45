use std::sync::Arc;

use chrono::Utc;

use crate::models::matchday::{Matchday, MatchdayInfo};
use crate::repositories::matchday_repository::MatchdayRepository;
use crate::services::errors::matchday_service_errors::MatchdayServiceError;

pub struct MatchdayService {
    repository: Arc<dyn MatchdayRepository + Send + Sync>,
}

impl MatchdayService {
    pub fn new(repository: Arc<dyn MatchdayRepository + Send + Sync>) -> Self {
        MatchdayService { repository }
    }

    /// The stored record, or the placeholder before the first PUT.
    pub async fn get_matchday(&self) -> Result<MatchdayInfo, MatchdayServiceError> {
        let stored = self
            .repository
            .get_matchday()
            .await
            .map_err(|e| MatchdayServiceError::RepositoryError(e.to_string()))?;
        Ok(stored
            .map(|matchday| matchday.info())
            .unwrap_or_else(MatchdayInfo::default_info))
    }

    pub async fn update_matchday(&self, info: &MatchdayInfo) -> Result<(), MatchdayServiceError> {
        let existing = self
            .repository
            .get_matchday()
            .await
            .map_err(|e| MatchdayServiceError::RepositoryError(e.to_string()))?;
        let created_at = existing.map(|m| m.created_at).unwrap_or_else(Utc::now);

        let matchday = Matchday::from_info(info, created_at);
        self.repository
            .put_matchday(&matchday)
            .await
            .map_err(|e| MatchdayServiceError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::matchday_repository::MockMatchdayRepository;
    use chrono::Duration;

    #[tokio::test]
    async fn test_get_without_record_serves_the_placeholder() {
        let mut repository = MockMatchdayRepository::new();
        repository
            .expect_get_matchday()
            .returning(|| Box::pin(async { Ok(None) }));

        let service = MatchdayService::new(Arc::new(repository));
        let info = service.get_matchday().await.unwrap();

        assert_eq!(info.number, 1);
        assert_eq!(info.top_player, "No data yet");
        assert_eq!(info.accumulated, "$0");
    }

    #[tokio::test]
    async fn test_get_returns_the_stored_record() {
        let stored = Matchday::from_info(
            &MatchdayInfo {
                number: 7,
                top_player: "Alex".to_string(),
                last_player: "Kim".to_string(),
                second_to_last: "Jo".to_string(),
                no_subs: "None".to_string(),
                accumulated: "$120".to_string(),
            },
            Utc::now(),
        );

        let mut repository = MockMatchdayRepository::new();
        repository.expect_get_matchday().returning(move || {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });

        let service = MatchdayService::new(Arc::new(repository));
        let info = service.get_matchday().await.unwrap();
        assert_eq!(info.number, 7);
        assert_eq!(info.top_player, "Alex");
    }

    #[tokio::test]
    async fn test_update_replaces_but_keeps_created_at() {
        let first_written = Utc::now() - Duration::days(14);
        let stored = Matchday::from_info(&MatchdayInfo::default_info(), first_written);

        let mut repository = MockMatchdayRepository::new();
        repository.expect_get_matchday().returning(move || {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        repository
            .expect_put_matchday()
            .withf(move |matchday| {
                matchday.number == 8 && matchday.created_at == first_written
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = MatchdayService::new(Arc::new(repository));
        service
            .update_matchday(&MatchdayInfo {
                number: 8,
                top_player: "Alex".to_string(),
                last_player: "Kim".to_string(),
                second_to_last: "Jo".to_string(),
                no_subs: "None".to_string(),
                accumulated: "$55".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_first_update_inserts_the_record() {
        let mut repository = MockMatchdayRepository::new();
        repository
            .expect_get_matchday()
            .returning(|| Box::pin(async { Ok(None) }));
        repository
            .expect_put_matchday()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = MatchdayService::new(Arc::new(repository));
        service
            .update_matchday(&MatchdayInfo::default_info())
            .await
            .unwrap();
    }
}
