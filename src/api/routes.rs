//! API route configuration.

use crate::api::handlers::{
    create_recommendation_handler, delete_recommendation_handler, get_recommendation_handler,
    list_recommendations_handler, update_recommendation_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Recommendation resource routes.
///
/// # Endpoints
///
/// - `GET    /recommendations`        - List recommendations (filterable)
/// - `POST   /recommendations`        - Create a recommendation
/// - `GET    /recommendations/{id}`   - Read a recommendation
/// - `PUT    /recommendations/{id}`   - Update a recommendation
/// - `DELETE /recommendations/{id}`   - Delete a recommendation
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations",
            get(list_recommendations_handler).post(create_recommendation_handler),
        )
        .route(
            "/recommendations/{id}",
            get(get_recommendation_handler)
                .put(update_recommendation_handler)
                .delete(delete_recommendation_handler),
        )
}
