use std::sync::Arc;

use tracing::debug;

use crate::models::position::Position;
use crate::models::rating::{
    MyRatingResponse, Rating, RatingWithRater, RatingsResponse, SubmitRatingRequest,
};
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::preference_repository::PreferenceRepository;
use crate::repositories::rating_repository::RatingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::rating_service_errors::RatingServiceError;

pub struct RatingService {
    rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    preference_repository: Arc<dyn PreferenceRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
}

/// Rounds half away from zero: a mean of 91.5 lands on 92, 16.67 on 17.
fn round_mean(total: i32, count: usize) -> i32 {
    (total as f64 / count as f64).round() as i32
}

impl RatingService {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
        preference_repository: Arc<dyn PreferenceRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        RatingService {
            rating_repository,
            preference_repository,
            user_repository,
        }
    }

    async fn position_of(&self, user_id: &str) -> Result<Option<Position>, RatingServiceError> {
        Ok(self
            .preference_repository
            .get_preferences(user_id)
            .await
            .map_err(|e| RatingServiceError::RepositoryError(e.to_string()))?
            .and_then(|preferences| preferences.position))
    }

    /// Validates and stores one rater's scorecard for one ratee. Skills are
    /// checked in schema order against the ratee's current position, so the
    /// first problem is reported under its position-specific label.
    pub async fn submit_rating(
        &self,
        rater_id: &str,
        rated_user_id: &str,
        submission: &SubmitRatingRequest,
    ) -> Result<i32, RatingServiceError> {
        if rater_id == rated_user_id {
            return Err(RatingServiceError::SelfRating);
        }

        let position = self
            .position_of(rated_user_id)
            .await?
            .ok_or(RatingServiceError::NoPosition)?;

        let mut values = [0i32; 6];
        for (index, label) in position.skills().iter().enumerate() {
            let value = submission
                .slot(index + 1)
                .ok_or_else(|| RatingServiceError::MissingSkill(label.to_string()))?;
            if !(0..=100).contains(&value) {
                return Err(RatingServiceError::SkillOutOfRange(label.to_string()));
            }
            values[index] = value as i32;
        }

        let overall_score = round_mean(values.iter().sum(), values.len());
        let rating = Rating::new(rated_user_id, rater_id, values, overall_score);
        self.rating_repository
            .put_rating(&rating)
            .await
            .map_err(|e| RatingServiceError::RepositoryError(e.to_string()))?;
        debug!(
            "Stored rating of {} by {} with overall score {}",
            rated_user_id, rater_id, overall_score
        );
        Ok(overall_score)
    }

    /// Everything a profile page needs: the ratee's ratings with rater names,
    /// the aggregate average, and the skill labels for their position.
    pub async fn get_ratings_for(
        &self,
        rated_user_id: &str,
    ) -> Result<RatingsResponse, RatingServiceError> {
        let position = self.position_of(rated_user_id).await?;
        let skills = position.map(|p| p.skill_names()).unwrap_or_default();

        let stored = self
            .rating_repository
            .get_ratings_for_user(rated_user_id)
            .await
            .map_err(|e| RatingServiceError::RepositoryError(e.to_string()))?;

        let mut ratings = Vec::with_capacity(stored.len());
        for rating in stored {
            match self.user_repository.get_user_by_id(&rating.rater_user_id).await {
                Ok(rater) => ratings.push(RatingWithRater {
                    rating,
                    rater_name: rater.name,
                }),
                // Rater deleted since the row was written: the cascade is
                // removing the row, so leave it out of the view.
                Err(UserRepositoryError::NotFound) => continue,
                Err(e) => return Err(RatingServiceError::RepositoryError(e.to_string())),
            }
        }

        let rating_count = ratings.len();
        let average_score = if rating_count == 0 {
            0
        } else {
            round_mean(
                ratings.iter().map(|r| r.rating.overall_score).sum(),
                rating_count,
            )
        };

        Ok(RatingsResponse {
            ratings,
            average_score,
            rating_count,
            skills,
            position,
        })
    }

    /// One rater's rating of one ratee, or None before the first submit. The
    /// skill labels come back either way so a client can render an empty form.
    pub async fn get_my_rating(
        &self,
        rater_id: &str,
        rated_user_id: &str,
    ) -> Result<MyRatingResponse, RatingServiceError> {
        let rating = self
            .rating_repository
            .get_rating(rated_user_id, rater_id)
            .await
            .map_err(|e| RatingServiceError::RepositoryError(e.to_string()))?;
        let skill_names = self
            .position_of(rated_user_id)
            .await?
            .map(|p| p.skill_names())
            .unwrap_or_default();
        Ok(MyRatingResponse {
            rating,
            skill_names,
        })
    }
}
