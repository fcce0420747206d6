//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every query.
//!
//! # Repositories
//!
//! - [`PgRecommendationRepository`] - Recommendation storage and retrieval

pub mod pg_recommendation_repository;

pub use pg_recommendation_repository::PgRecommendationRepository;
