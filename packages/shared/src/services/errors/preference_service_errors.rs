use std::fmt;

#[derive(Debug)]
pub enum PreferenceServiceError {
    ValidationError(String),
    RepositoryError(String),
}

impl fmt::Display for PreferenceServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PreferenceServiceError::ValidationError(msg) => write!(f, "{}", msg),
            PreferenceServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceServiceError {}
