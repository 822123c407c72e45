#[derive(Debug)]
pub enum MatchdayRepositoryError {
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for MatchdayRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchdayRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            MatchdayRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for MatchdayRepositoryError {}
