use crate::models::matchday::{Matchday, MATCHDAY_RECORD_ID};
use crate::repositories::errors::matchday_repository_errors::MatchdayRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbMatchdayRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbMatchdayRepository {
    pub fn new(client: Client) -> Self {
        let table_name = std::env::var("MATCHDAY_TABLE")
            .expect("MATCHDAY_TABLE environment variable must be set");
        Self { client, table_name }
    }

    pub fn with_table_name(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait MatchdayRepository: Send + Sync {
    async fn get_matchday(&self) -> Result<Option<Matchday>, MatchdayRepositoryError>;
    /// Writes the singleton row under its fixed key: replace-or-insert.
    async fn put_matchday(&self, matchday: &Matchday) -> Result<(), MatchdayRepositoryError>;
}

#[async_trait]
impl MatchdayRepository for DynamoDbMatchdayRepository {
    async fn get_matchday(&self) -> Result<Option<Matchday>, MatchdayRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "id",
                to_attribute_value(MATCHDAY_RECORD_ID)
                    .map_err(|e| MatchdayRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| MatchdayRepositoryError::DynamoDb(e.to_string()))?;
        match output.item {
            Some(item) => from_item(item)
                .map(Some)
                .map_err(|e| MatchdayRepositoryError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn put_matchday(&self, matchday: &Matchday) -> Result<(), MatchdayRepositoryError> {
        let item =
            to_item(matchday).map_err(|e| MatchdayRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| MatchdayRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }
}
