use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::preferences::Preferences;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password: String, name: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            email,
            password,
            name,
            created_at: Utc::now(),
        }
    }
}

/// Row of the roster view: a user joined with their preference fields and the
/// aggregate of the ratings they have received.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserWithDetails {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub position: String,
    pub favorite_team: String,
    pub picture: String,
    pub slogan: String,
    pub average_rating: i32,
    pub rating_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserWithDetails>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUser {
    pub email: String,
    pub name: String,
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_unique_id_and_timestamp() {
        let a = User::new(
            "a@example.com".to_string(),
            "hash-a".to_string(),
            "A".to_string(),
        );
        let b = User::new(
            "b@example.com".to_string(),
            "hash-b".to_string(),
            "B".to_string(),
        );

        assert_ne!(a.id, b.id);
        assert_eq!(a.email, "a@example.com");
        assert_eq!(a.name, "A");
        assert!(a.created_at <= Utc::now());
    }
}
