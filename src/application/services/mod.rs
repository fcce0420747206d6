//! Business logic services for the application layer.

pub mod recommendation_service;

pub use recommendation_service::RecommendationService;
