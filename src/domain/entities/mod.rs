//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with no I/O. Persistence is handled by
//! the repository traits in [`crate::domain::repositories`].
//!
//! # Entity Types
//!
//! - [`Recommendation`] - A directed pairing of two product SKUs
//! - [`RecommendationType`] - The closed set of recommendation categories

pub mod recommendation;
pub mod recommendation_type;

pub use recommendation::Recommendation;
pub use recommendation_type::RecommendationType;
