mod common;

use recommendations::AppError;
use recommendations::domain::entities::{Recommendation, RecommendationType};
use recommendations::domain::repositories::{RecommendationFilter, RecommendationRepository};
use recommendations::infrastructure::persistence::PgRecommendationRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: &PgPool) -> PgRecommendationRepository {
    PgRecommendationRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test]
async fn test_all_on_empty_store(pool: PgPool) {
    let repo = repo(&pool);

    let result = repo.all().await.unwrap();

    assert!(result.is_empty());
}

#[sqlx::test]
async fn test_create_recommendation(pool: PgPool) {
    let repo = repo(&pool);

    let recommendation = Recommendation::new("A1", "B1", RecommendationType::UpSell);
    assert!(recommendation.id.is_none());

    let created = repo.create(recommendation).await.unwrap();
    assert!(created.id.is_some());

    let all = repo.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].product_a_sku, "A1");
    assert_eq!(all[0].product_b_sku, "B1");
    assert_eq!(all[0].recommendation_type, RecommendationType::UpSell);
}

#[sqlx::test]
async fn test_find_recommendation(pool: PgPool) {
    let repo = repo(&pool);

    let created = repo
        .create(Recommendation::new("AB1111", "BA2222", RecommendationType::CrossSell))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let found = repo.find(id).await.unwrap().unwrap();

    assert_eq!(found.id, Some(id));
    assert_eq!(found.product_a_sku, created.product_a_sku);
    assert_eq!(found.product_b_sku, created.product_b_sku);
    assert_eq!(found.recommendation_type, created.recommendation_type);
}

#[sqlx::test]
async fn test_find_not_found(pool: PgPool) {
    let repo = repo(&pool);

    let result = repo.find(987_654).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_ids_are_unique(pool: PgPool) {
    let repo = repo(&pool);

    let first = repo
        .create(Recommendation::new("A1", "B1", RecommendationType::Bundle))
        .await
        .unwrap();
    // identical tuples are not deduplicated
    let second = repo
        .create(Recommendation::new("A1", "B1", RecommendationType::Bundle))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_create_invalid_leaves_store_unchanged(pool: PgPool) {
    common::create_test_recommendation(&pool, "A1", "B1", RecommendationType::UpSell).await;
    let repo = repo(&pool);

    let result = repo
        .create(Recommendation::new("A2", "", RecommendationType::Accessory))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(common::count_recommendations(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_rejects_persisted_record(pool: PgPool) {
    let repo = repo(&pool);

    let created = repo
        .create(Recommendation::new("A1", "B1", RecommendationType::UpSell))
        .await
        .unwrap();

    let result = repo.create(created).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_update_recommendation(pool: PgPool) {
    let repo = repo(&pool);

    let mut recommendation = repo
        .create(Recommendation::new("A1", "B1", RecommendationType::UpSell))
        .await
        .unwrap();
    let id = recommendation.id;

    recommendation.product_b_sku = "B2".to_string();
    recommendation.recommendation_type = RecommendationType::Accessory;
    let updated = repo.update(recommendation).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.product_b_sku, "B2");

    let found = repo.find(id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.product_b_sku, "B2");
    assert_eq!(found.recommendation_type, RecommendationType::Accessory);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_update_without_id(pool: PgPool) {
    let repo = repo(&pool);

    let result = repo
        .update(Recommendation::new("A1", "B1", RecommendationType::UpSell))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[sqlx::test]
async fn test_update_unknown_id(pool: PgPool) {
    let repo = repo(&pool);

    let mut ghost = Recommendation::new("A1", "B1", RecommendationType::UpSell);
    ghost.id = Some(31_337);

    let result = repo.update(ghost).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_update_invalid_keeps_stored_values(pool: PgPool) {
    let id = common::create_test_recommendation(&pool, "A1", "B1", RecommendationType::UpSell).await;
    let repo = repo(&pool);

    let mut recommendation = repo.find(id).await.unwrap().unwrap();
    recommendation.product_a_sku = "   ".to_string();

    let result = repo.update(recommendation).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let stored = repo.find(id).await.unwrap().unwrap();
    assert_eq!(stored.product_a_sku, "A1");
}

#[sqlx::test]
async fn test_delete_recommendation(pool: PgPool) {
    let keep = common::create_test_recommendation(&pool, "A1", "B1", RecommendationType::UpSell).await;
    let gone = common::create_test_recommendation(&pool, "A2", "B2", RecommendationType::Bundle).await;
    let repo = repo(&pool);

    assert!(repo.delete(gone).await.unwrap());

    assert!(repo.find(gone).await.unwrap().is_none());
    assert!(repo.find(keep).await.unwrap().is_some());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_delete_missing_changes_nothing(pool: PgPool) {
    common::create_test_recommendation(&pool, "A1", "B1", RecommendationType::UpSell).await;
    let repo = repo(&pool);

    assert!(!repo.delete(424_242).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_find_by_filters(pool: PgPool) {
    common::create_test_recommendation(&pool, "A1", "B1", RecommendationType::UpSell).await;
    common::create_test_recommendation(&pool, "A1", "B2", RecommendationType::CrossSell).await;
    common::create_test_recommendation(&pool, "A2", "B1", RecommendationType::UpSell).await;
    let repo = repo(&pool);

    let by_a = repo
        .find_by(RecommendationFilter::new().with_product_a_sku("A1"))
        .await
        .unwrap();
    assert_eq!(by_a.len(), 2);
    assert!(by_a.iter().all(|r| r.product_a_sku == "A1"));

    let by_type = repo
        .find_by(RecommendationFilter::new().with_type(RecommendationType::UpSell))
        .await
        .unwrap();
    assert_eq!(by_type.len(), 2);

    let combined = repo
        .find_by(
            RecommendationFilter::new()
                .with_product_b_sku("B1")
                .with_type(RecommendationType::UpSell),
        )
        .await
        .unwrap();
    assert_eq!(combined.len(), 2);

    let none = repo
        .find_by(RecommendationFilter::new().with_type(RecommendationType::Bundle))
        .await
        .unwrap();
    assert!(none.is_empty());

    let everything = repo.find_by(RecommendationFilter::new()).await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[sqlx::test]
async fn test_all_is_ordered_by_id(pool: PgPool) {
    for i in 1..=3 {
        common::create_test_recommendation(
            &pool,
            &format!("A{}", i),
            &format!("B{}", i),
            RecommendationType::Accessory,
        )
        .await;
    }
    let repo = repo(&pool);

    let all = repo.all().await.unwrap();
    let ids: Vec<i64> = all.iter().filter_map(|r| r.id).collect();

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[sqlx::test]
async fn test_schema_rejects_unknown_type(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO recommendations (product_a_sku, product_b_sku, type) VALUES ('A', 'B', 'NOT_A_TYPE')",
    )
    .execute(&pool)
    .await;

    let err: AppError = result.unwrap_err().into();
    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(common::count_recommendations(&pool).await, 0);
}
