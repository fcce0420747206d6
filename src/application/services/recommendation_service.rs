//! Recommendation management service.

use crate::domain::entities::Recommendation;
use crate::domain::repositories::{RecommendationFilter, RecommendationRepository};
use crate::error::AppError;
use serde_json::{Value, json};
use std::sync::Arc;

/// Service for creating, reading, updating and deleting recommendations.
///
/// Turns JSON bodies into entities (rejecting unknown types and malformed
/// fields), maps missing records to [`AppError::NotFound`] and logs every
/// mutation. Write rules (transient for create, persisted for update,
/// non-empty SKUs) are enforced by the repository.
pub struct RecommendationService<R: RecommendationRepository> {
    repository: Arc<R>,
}

impl<R: RecommendationRepository> RecommendationService<R> {
    /// Creates a new recommendation service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a new recommendation and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the recommendation already has an id
    /// or a SKU is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, recommendation: Recommendation) -> Result<Recommendation, AppError> {
        let created = self.repository.create(recommendation).await?;
        tracing::info!("Created {}", created);
        Ok(created)
    }

    /// Deserializes a JSON body into a new recommendation and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is malformed, misses a
    /// field or names an unknown type. See [`Self::create`] for the rest.
    pub async fn create_from_json(&self, data: &Value) -> Result<Recommendation, AppError> {
        let recommendation = Recommendation::try_from(data)?;
        self.create(recommendation).await
    }

    /// Looks up a recommendation, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find(&self, id: i64) -> Result<Option<Recommendation>, AppError> {
        self.repository.find(id).await
    }

    /// Retrieves a recommendation by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recommendation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Recommendation, AppError> {
        self.repository.find(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Recommendation with id '{id}' was not found."),
                json!({ "id": id }),
            )
        })
    }

    /// Lists recommendations, narrowed by `filter` when any field is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, filter: RecommendationFilter) -> Result<Vec<Recommendation>, AppError> {
        if filter.is_empty() {
            self.repository.all().await
        } else {
            self.repository.find_by(filter).await
        }
    }

    /// Writes the fields of a persisted recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is missing, unknown to the
    /// store, or a SKU is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, recommendation: Recommendation) -> Result<Recommendation, AppError> {
        let updated = self.repository.update(recommendation).await?;
        tracing::info!("Updated {}", updated);
        Ok(updated)
    }

    /// Applies a JSON body to the stored recommendation `id` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recommendation does not exist.
    /// Returns [`AppError::Validation`] if the body is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_from_json(&self, id: i64, data: &Value) -> Result<Recommendation, AppError> {
        let mut recommendation = self.get(id).await?;
        recommendation.deserialize(data)?;
        self.update(recommendation).await
    }

    /// Deletes a recommendation.
    ///
    /// Deleting an id that does not exist is not an error and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            tracing::info!(id, "Deleted recommendation");
        } else {
            tracing::debug!(id, "Delete requested for missing recommendation");
        }
        Ok(())
    }

    /// Counts persisted recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
