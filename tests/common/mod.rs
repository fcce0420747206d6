#![allow(dead_code)]

use recommendations::domain::entities::RecommendationType;
use recommendations::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_recommendation(
    pool: &PgPool,
    product_a_sku: &str,
    product_b_sku: &str,
    recommendation_type: RecommendationType,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO recommendations (product_a_sku, product_b_sku, type) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(product_a_sku)
    .bind(product_b_sku)
    .bind(recommendation_type.as_str())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_recommendations(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM recommendations")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}
