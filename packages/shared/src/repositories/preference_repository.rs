use crate::models::preferences::Preferences;
use crate::repositories::errors::preference_repository_errors::PreferenceRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbPreferenceRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbPreferenceRepository {
    pub fn new(client: Client) -> Self {
        let table_name = std::env::var("PREFERENCES_TABLE")
            .expect("PREFERENCES_TABLE environment variable must be set");
        Self { client, table_name }
    }

    pub fn with_table_name(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait PreferenceRepository: Send + Sync {
    /// Whole-row write keyed by `user_id`; the key makes this an upsert.
    async fn put_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<(), PreferenceRepositoryError>;
    async fn get_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<Preferences>, PreferenceRepositoryError>;
    async fn delete_preferences(&self, user_id: &str) -> Result<(), PreferenceRepositoryError>;
}

#[async_trait]
impl PreferenceRepository for DynamoDbPreferenceRepository {
    async fn put_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<(), PreferenceRepositoryError> {
        let item = to_item(preferences)
            .map_err(|e| PreferenceRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| PreferenceRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn get_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<Preferences>, PreferenceRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "user_id",
                to_attribute_value(user_id)
                    .map_err(|e| PreferenceRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| PreferenceRepositoryError::DynamoDb(e.to_string()))?;
        match output.item {
            Some(item) => from_item(item)
                .map(Some)
                .map_err(|e| PreferenceRepositoryError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn delete_preferences(&self, user_id: &str) -> Result<(), PreferenceRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "user_id",
                to_attribute_value(user_id)
                    .map_err(|e| PreferenceRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| PreferenceRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }
}
