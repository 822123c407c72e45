use std::fmt;

#[derive(Debug)]
pub enum MatchdayServiceError {
    RepositoryError(String),
}

impl fmt::Display for MatchdayServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchdayServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for MatchdayServiceError {}
