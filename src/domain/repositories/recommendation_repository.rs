//! Repository trait for recommendation data access.

use crate::domain::entities::{Recommendation, RecommendationType};
use crate::error::AppError;
use async_trait::async_trait;

/// Equality predicate used by [`RecommendationRepository::find_by`].
///
/// `None` fields do not constrain the result; an empty filter matches every
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationFilter {
    pub product_a_sku: Option<String>,
    pub product_b_sku: Option<String>,
    pub recommendation_type: Option<RecommendationType>,
}

impl RecommendationFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to recommendations whose source product is `sku`.
    pub fn with_product_a_sku(mut self, sku: impl Into<String>) -> Self {
        self.product_a_sku = Some(sku.into());
        self
    }

    /// Restricts results to recommendations whose suggested product is `sku`.
    pub fn with_product_b_sku(mut self, sku: impl Into<String>) -> Self {
        self.product_b_sku = Some(sku.into());
        self
    }

    /// Restricts results to a single category.
    pub fn with_type(mut self, recommendation_type: RecommendationType) -> Self {
        self.recommendation_type = Some(recommendation_type);
        self
    }

    /// Returns true if no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.product_a_sku.is_none()
            && self.product_b_sku.is_none()
            && self.recommendation_type.is_none()
    }
}

/// Repository interface for recommendation storage.
///
/// Every mutating call runs in its own transaction: it either commits in full
/// or leaves the store unchanged.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecommendationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_recommendation.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Persists a transient recommendation and returns it with its new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the recommendation already has an id
    /// or fails [`Recommendation::validate`]. Nothing is written in that case.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, recommendation: Recommendation) -> Result<Recommendation, AppError>;

    /// Writes the fields of an already persisted recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is `None`, no row has that id,
    /// or the fields are invalid.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, recommendation: Recommendation) -> Result<Recommendation, AppError>;

    /// Permanently removes a recommendation.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds a recommendation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Recommendation))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: i64) -> Result<Option<Recommendation>, AppError>;

    /// Returns every recommendation ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn all(&self) -> Result<Vec<Recommendation>, AppError>;

    /// Returns recommendations matching every constrained field of `filter`,
    /// ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by(&self, filter: RecommendationFilter)
    -> Result<Vec<Recommendation>, AppError>;

    /// Counts persisted recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
