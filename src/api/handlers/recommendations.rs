//! Handlers for recommendation endpoints (list, create, read, update, delete).

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use crate::api::dto::recommendation::RecommendationQuery;
use crate::api::extract::{JsonBody, RecommendationId};
use crate::domain::repositories::RecommendationFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists recommendations, optionally filtered by SKU or type.
///
/// # Endpoint
///
/// `GET /recommendations?product_a_sku=..&product_b_sku=..&type=..`
///
/// # Errors
///
/// Returns 400 if `type` is not a known recommendation type.
pub async fn list_recommendations_handler(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let filter = RecommendationFilter::try_from(query)?;

    let recommendations = state.recommendation_service.list(filter).await?;

    Ok(Json(
        recommendations.iter().map(|r| r.serialize()).collect(),
    ))
}

/// Creates a recommendation.
///
/// # Endpoint
///
/// `POST /recommendations`
///
/// # Request Body
///
/// ```json
/// { "product_a_sku": "AA0001", "product_b_sku": "AA0002", "type": "UP_SELL" }
/// ```
///
/// Any `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object, a field is missing, empty or
/// of the wrong type, or `type` is unknown.
pub async fn create_recommendation_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .recommendation_service
        .create_from_json(&payload)
        .await?;

    let location = match created.id {
        Some(id) => format!("/recommendations/{id}"),
        None => "/recommendations".to_string(),
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.serialize()),
    ))
}

/// Retrieves a single recommendation.
///
/// # Endpoint
///
/// `GET /recommendations/{id}`
///
/// # Errors
///
/// Returns 404 if the recommendation does not exist.
pub async fn get_recommendation_handler(
    RecommendationId(id): RecommendationId,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let recommendation = state.recommendation_service.get(id).await?;
    Ok(Json(recommendation.serialize()))
}

/// Replaces the SKUs and type of a recommendation.
///
/// # Endpoint
///
/// `PUT /recommendations/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not numeric or the body is invalid.
/// Returns 404 if the recommendation does not exist.
pub async fn update_recommendation_handler(
    RecommendationId(id): RecommendationId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<Json<Value>, AppError> {
    let updated = state
        .recommendation_service
        .update_from_json(id, &payload)
        .await?;

    Ok(Json(updated.serialize()))
}

/// Deletes a recommendation.
///
/// # Endpoint
///
/// `DELETE /recommendations/{id}`
///
/// Returns 204 whether or not the recommendation existed.
pub async fn delete_recommendation_handler(
    RecommendationId(id): RecommendationId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.recommendation_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
