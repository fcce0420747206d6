//! Application layer services implementing business logic.
//!
//! Services validate input and coordinate repository calls, giving HTTP
//! handlers and the admin CLI a single entry point per operation.
//!
//! # Available Services
//!
//! - [`services::recommendation_service::RecommendationService`] - Recommendation lifecycle and lookups

pub mod services;
