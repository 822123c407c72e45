use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::position::Position;

/// One rater's scorecard for one ratee. The `(rated_user_id, rater_user_id)`
/// pair is the row identity; re-submitting replaces the row wholesale.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rating {
    pub rated_user_id: String,
    pub rater_user_id: String,
    pub skill_1: i32,
    pub skill_2: i32,
    pub skill_3: i32,
    pub skill_4: i32,
    pub skill_5: i32,
    pub skill_6: i32,
    pub overall_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        rated_user_id: &str,
        rater_user_id: &str,
        skills: [i32; 6],
        overall_score: i32,
    ) -> Self {
        let now = Utc::now();
        Rating {
            rated_user_id: rated_user_id.to_string(),
            rater_user_id: rater_user_id.to_string(),
            skill_1: skills[0],
            skill_2: skills[1],
            skill_3: skills[2],
            skill_4: skills[3],
            skill_5: skills[4],
            skill_6: skills[5],
            overall_score,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn skills(&self) -> [i32; 6] {
        [
            self.skill_1,
            self.skill_2,
            self.skill_3,
            self.skill_4,
            self.skill_5,
            self.skill_6,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingWithRater {
    #[serde(flatten)]
    pub rating: Rating,
    pub rater_name: String,
}

/// Body of POST /api/ratings/{user_id}. Slots are optional so a missing skill
/// can be reported by label instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubmitRatingRequest {
    #[serde(default)]
    pub skill_1: Option<i64>,
    #[serde(default)]
    pub skill_2: Option<i64>,
    #[serde(default)]
    pub skill_3: Option<i64>,
    #[serde(default)]
    pub skill_4: Option<i64>,
    #[serde(default)]
    pub skill_5: Option<i64>,
    #[serde(default)]
    pub skill_6: Option<i64>,
}

impl SubmitRatingRequest {
    pub fn from_values(values: [i64; 6]) -> Self {
        SubmitRatingRequest {
            skill_1: Some(values[0]),
            skill_2: Some(values[1]),
            skill_3: Some(values[2]),
            skill_4: Some(values[3]),
            skill_5: Some(values[4]),
            skill_6: Some(values[5]),
        }
    }

    /// Slot lookup by 1-based index, matching the `skill_1..skill_6` wire names.
    pub fn slot(&self, index: usize) -> Option<i64> {
        match index {
            1 => self.skill_1,
            2 => self.skill_2,
            3 => self.skill_3,
            4 => self.skill_4,
            5 => self.skill_5,
            6 => self.skill_6,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingsResponse {
    pub ratings: Vec<RatingWithRater>,
    pub average_score: i32,
    pub rating_count: usize,
    pub skills: Vec<String>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyRatingResponse {
    pub rating: Option<Rating>,
    pub skill_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitRatingResponse {
    pub message: String,
    pub overall_score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_keeps_skill_slot_order() {
        let rating = Rating::new("ratee", "rater", [10, 20, 30, 40, 50, 60], 35);
        assert_eq!(rating.skills(), [10, 20, 30, 40, 50, 60]);
        assert_eq!(rating.rated_user_id, "ratee");
        assert_eq!(rating.rater_user_id, "rater");
        assert_eq!(rating.overall_score, 35);
    }

    #[test]
    fn test_submit_request_slot_lookup() {
        let request = SubmitRatingRequest::from_values([1, 2, 3, 4, 5, 6]);
        for i in 1..=6 {
            assert_eq!(request.slot(i), Some(i as i64));
        }
        assert_eq!(request.slot(0), None);
        assert_eq!(request.slot(7), None);
    }

    #[test]
    fn test_missing_slots_deserialize_as_none() {
        let request: SubmitRatingRequest =
            serde_json::from_str(r#"{"skill_1": 80, "skill_3": 70}"#).unwrap();
        assert_eq!(request.slot(1), Some(80));
        assert_eq!(request.slot(2), None);
        assert_eq!(request.slot(3), Some(70));
    }

    #[test]
    fn test_rating_with_rater_flattens_row_fields() {
        let rating = Rating::new("ratee", "rater", [50, 50, 50, 50, 50, 50], 50);
        let with_rater = RatingWithRater {
            rating,
            rater_name: "Sam".to_string(),
        };
        let value = serde_json::to_value(&with_rater).unwrap();
        assert_eq!(value["rater_name"], "Sam");
        assert_eq!(value["overall_score"], 50);
        assert_eq!(value["skill_1"], 50);
    }
}
