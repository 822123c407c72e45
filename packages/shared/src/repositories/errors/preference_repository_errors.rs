#[derive(Debug)]
pub enum PreferenceRepositoryError {
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for PreferenceRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            PreferenceRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceRepositoryError {}
