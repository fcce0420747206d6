//! Domain layer containing business entities and rules.
//!
//! This module is independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Validation error raised before any store mutation
//!
//! # Design Principles
//!
//! - Entities are plain structs; they never touch the database themselves
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Each mutating repository call is its own unit of work

pub mod entities;
pub mod repositories;
pub mod validation;

pub use validation::DataValidationError;
