//! Validation errors raised before any write reaches the store.

use thiserror::Error;

/// Rejection of malformed recommendation input.
///
/// Every variant names the field or rule that failed. These errors are
/// produced before a unit of work starts (or inside one that is then rolled
/// back), so a `DataValidationError` never follows a durable write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    #[error("Invalid Recommendation: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid Recommendation: {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid Recommendation: {field} must be {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid type for [type]: {0}")]
    InvalidType(String),

    #[error("Invalid Recommendation: body of request contained bad or no data")]
    MalformedBody,

    #[error("Update called with empty ID field")]
    MissingId,

    #[error("Create called on recommendation that already has id {0}")]
    AlreadyPersisted(i64),

    #[error("Recommendation with id {0} could not be found for update")]
    UnknownId(i64),
}

impl DataValidationError {
    /// Name of the offending field, when the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => Some(*field),
            Self::InvalidFieldType { field, .. } => Some(*field),
            Self::InvalidType(_) => Some("type"),
            Self::MissingId | Self::AlreadyPersisted(_) | Self::UnknownId(_) => Some("id"),
            Self::MalformedBody => None,
        }
    }
}
