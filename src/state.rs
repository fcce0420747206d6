//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::RecommendationService;
use crate::infrastructure::persistence::PgRecommendationRepository;

/// Services shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub recommendation_service: Arc<RecommendationService<PgRecommendationRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repository into the services.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let repository = Arc::new(PgRecommendationRepository::new(pool));

        Self {
            recommendation_service: Arc::new(RecommendationService::new(repository)),
        }
    }
}
