use crate::models::rating::Rating;
use crate::repositories::errors::rating_repository_errors::RatingRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

/// Ratings table: partition key `rated_user_id`, sort key `rater_user_id`.
/// The composite key is the (ratee, rater) uniqueness constraint; a plain
/// `put_item` therefore replaces any earlier rating by the same rater, and two
/// concurrent first writes for the same pair collapse to one row at the store.
pub struct DynamoDbRatingRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbRatingRepository {
    pub fn new(client: Client) -> Self {
        let table_name =
            std::env::var("RATINGS_TABLE").expect("RATINGS_TABLE environment variable must be set");
        Self { client, table_name }
    }

    pub fn with_table_name(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait RatingRepository: Send + Sync {
    async fn put_rating(&self, rating: &Rating) -> Result<(), RatingRepositoryError>;
    async fn get_rating(
        &self,
        rated_user_id: &str,
        rater_user_id: &str,
    ) -> Result<Option<Rating>, RatingRepositoryError>;
    async fn get_ratings_for_user(
        &self,
        rated_user_id: &str,
    ) -> Result<Vec<Rating>, RatingRepositoryError>;
    async fn get_ratings_by_rater(
        &self,
        rater_user_id: &str,
    ) -> Result<Vec<Rating>, RatingRepositoryError>;
    async fn delete_rating(
        &self,
        rated_user_id: &str,
        rater_user_id: &str,
    ) -> Result<(), RatingRepositoryError>;
}

#[async_trait]
impl RatingRepository for DynamoDbRatingRepository {
    async fn put_rating(&self, rating: &Rating) -> Result<(), RatingRepositoryError> {
        let item =
            to_item(rating).map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn get_rating(
        &self,
        rated_user_id: &str,
        rater_user_id: &str,
    ) -> Result<Option<Rating>, RatingRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "rated_user_id",
                to_attribute_value(rated_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .key(
                "rater_user_id",
                to_attribute_value(rater_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        match output.item {
            Some(item) => from_item(item)
                .map(Some)
                .map_err(|e| RatingRepositoryError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn get_ratings_for_user(
        &self,
        rated_user_id: &str,
    ) -> Result<Vec<Rating>, RatingRepositoryError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("rated_user_id = :rated_user_id")
            .expression_attribute_values(
                ":rated_user_id",
                to_attribute_value(rated_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                from_item(item).map_err(|e| RatingRepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }

    async fn get_ratings_by_rater(
        &self,
        rater_user_id: &str,
    ) -> Result<Vec<Rating>, RatingRepositoryError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI_RatingsByRater")
            .key_condition_expression("rater_user_id = :rater_user_id")
            .expression_attribute_values(
                ":rater_user_id",
                to_attribute_value(rater_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                from_item(item).map_err(|e| RatingRepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }

    async fn delete_rating(
        &self,
        rated_user_id: &str,
        rater_user_id: &str,
    ) -> Result<(), RatingRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "rated_user_id",
                to_attribute_value(rated_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .key(
                "rater_user_id",
                to_attribute_value(rater_user_id)
                    .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }
}
