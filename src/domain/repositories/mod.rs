//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RecommendationRepository`] - Recommendation CRUD and filtered lookups
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod recommendation_repository;

pub use recommendation_repository::{RecommendationFilter, RecommendationRepository};

#[cfg(test)]
pub use recommendation_repository::MockRecommendationRepository;
