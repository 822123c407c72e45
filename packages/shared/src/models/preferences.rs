use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::position::Position;

/// Upper bound on the stored picture payload (a data URI), in characters.
pub const MAX_PICTURE_CHARS: usize = 1_000_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Preferences {
    pub user_id: String,
    pub position: Option<Position>,
    pub favorite_team: Option<String>,
    pub picture: Option<String>,
    pub slogan: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Preferences {
    /// Completeness is derived from the stored fields; the persisted
    /// `completed` flag is informational only and never consulted.
    pub fn is_complete(&self) -> bool {
        self.position.is_some()
            && self
                .favorite_team
                .as_deref()
                .map_or(false, |team| !team.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub favorite_team: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavePreferencesResponse {
    pub message: String,
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesCheckResponse {
    pub preferences_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(position: Option<Position>, favorite_team: Option<&str>) -> Preferences {
        Preferences {
            user_id: "user-1".to_string(),
            position,
            favorite_team: favorite_team.map(|t| t.to_string()),
            picture: None,
            slogan: None,
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_needs_both_position_and_team() {
        assert!(preferences(Some(Position::Forward), Some("Tigers")).is_complete());
        assert!(!preferences(None, Some("Tigers")).is_complete());
        assert!(!preferences(Some(Position::Forward), None).is_complete());
        assert!(!preferences(None, None).is_complete());
    }

    #[test]
    fn test_empty_team_string_is_incomplete() {
        assert!(!preferences(Some(Position::Defender), Some("")).is_complete());
    }

    #[test]
    fn test_stored_completed_flag_is_ignored() {
        let mut prefs = preferences(None, None);
        prefs.completed = true;
        assert!(!prefs.is_complete());

        let mut prefs = preferences(Some(Position::Midfielder), Some("Rovers"));
        prefs.completed = false;
        assert!(prefs.is_complete());
    }
}
