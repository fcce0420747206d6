//! PostgreSQL implementation of recommendation repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::DataValidationError;
use crate::domain::entities::{Recommendation, RecommendationType};
use crate::domain::repositories::{RecommendationFilter, RecommendationRepository};
use crate::error::AppError;

/// A row of the `recommendations` table.
#[derive(Debug, FromRow)]
struct RecommendationRow {
    id: i64,
    product_a_sku: String,
    product_b_sku: String,
    #[sqlx(rename = "type")]
    recommendation_type: String,
}

impl TryFrom<RecommendationRow> for Recommendation {
    type Error = AppError;

    fn try_from(row: RecommendationRow) -> Result<Self, Self::Error> {
        // The CHECK constraint keeps unknown names out; a failure here means
        // the schema and the enum have drifted apart.
        let recommendation_type: RecommendationType = row.recommendation_type.parse().map_err(|_| {
            AppError::internal(
                "Stored recommendation has an unknown type",
                json!({ "id": row.id, "type": row.recommendation_type }),
            )
        })?;

        Ok(Recommendation {
            id: Some(row.id),
            product_a_sku: row.product_a_sku,
            product_b_sku: row.product_b_sku,
            recommendation_type,
        })
    }
}

fn into_entities(rows: Vec<RecommendationRow>) -> Result<Vec<Recommendation>, AppError> {
    rows.into_iter().map(Recommendation::try_from).collect()
}

/// PostgreSQL repository for recommendation storage and retrieval.
///
/// Each write opens its own transaction. Validation happens before the
/// transaction starts; any later failure drops the transaction, which rolls
/// it back and returns the connection to the pool.
pub struct PgRecommendationRepository {
    pool: Arc<PgPool>,
}

impl PgRecommendationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    async fn create(&self, recommendation: Recommendation) -> Result<Recommendation, AppError> {
        if let Some(id) = recommendation.id {
            return Err(DataValidationError::AlreadyPersisted(id).into());
        }
        recommendation.validate()?;

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RecommendationRow>(
            r#"
            INSERT INTO recommendations (product_a_sku, product_b_sku, type)
            VALUES ($1, $2, $3)
            RETURNING id, product_a_sku, product_b_sku, type
            "#,
        )
        .bind(&recommendation.product_a_sku)
        .bind(&recommendation.product_b_sku)
        .bind(recommendation.recommendation_type.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let created = Recommendation::try_from(row)?;
        tracing::debug!("Created {}", created);
        Ok(created)
    }

    async fn update(&self, recommendation: Recommendation) -> Result<Recommendation, AppError> {
        let id = recommendation.id.ok_or(DataValidationError::MissingId)?;
        recommendation.validate()?;

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RecommendationRow>(
            r#"
            UPDATE recommendations SET
                product_a_sku = $2,
                product_b_sku = $3,
                type          = $4
            WHERE id = $1
            RETURNING id, product_a_sku, product_b_sku, type
            "#,
        )
        .bind(id)
        .bind(&recommendation.product_a_sku)
        .bind(&recommendation.product_b_sku)
        .bind(recommendation.recommendation_type.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(DataValidationError::UnknownId(id).into());
        };

        tx.commit().await?;

        let updated = Recommendation::try_from(row)?;
        tracing::debug!("Updated {}", updated);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM recommendations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i64) -> Result<Option<Recommendation>, AppError> {
        let row = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT id, product_a_sku, product_b_sku, type
            FROM recommendations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Recommendation::try_from).transpose()
    }

    async fn all(&self) -> Result<Vec<Recommendation>, AppError> {
        let rows = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT id, product_a_sku, product_b_sku, type
            FROM recommendations
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        into_entities(rows)
    }

    async fn find_by(
        &self,
        filter: RecommendationFilter,
    ) -> Result<Vec<Recommendation>, AppError> {
        let rows = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT id, product_a_sku, product_b_sku, type
            FROM recommendations
            WHERE ($1::text IS NULL OR product_a_sku = $1)
              AND ($2::text IS NULL OR product_b_sku = $2)
              AND ($3::text IS NULL OR type = $3)
            ORDER BY id
            "#,
        )
        .bind(filter.product_a_sku)
        .bind(filter.product_b_sku)
        .bind(filter.recommendation_type.map(|t| t.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        into_entities(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recommendations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
