use std::fmt;

#[derive(Debug)]
pub enum RatingServiceError {
    SelfRating,
    NoPosition,
    MissingSkill(String),
    SkillOutOfRange(String),
    RepositoryError(String),
}

impl fmt::Display for RatingServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RatingServiceError::SelfRating => write!(f, "You cannot rate yourself"),
            RatingServiceError::NoPosition => write!(f, "User has no position set"),
            RatingServiceError::MissingSkill(skill) => write!(f, "Missing skill: {}", skill),
            RatingServiceError::SkillOutOfRange(skill) => {
                write!(f, "Skill {} must be between 0 and 100", skill)
            }
            RatingServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RatingServiceError {}
