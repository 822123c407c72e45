#[derive(Debug)]
pub enum RatingRepositoryError {
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for RatingRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            RatingRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for RatingRepositoryError {}
