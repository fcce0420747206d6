//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and renders
//! recommendations in their serialized JSON form.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for query strings and health output
//! - [`extract`] - Request extractors with JSON error responses
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
