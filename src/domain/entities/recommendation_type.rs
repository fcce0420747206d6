//! Closed set of recommendation categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::DataValidationError;

/// Why product B is suggested alongside product A.
///
/// Stored and serialized by its upper-case name (`"UP_SELL"`, ...). Parsing
/// rejects any other string instead of coercing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    UpSell,
    CrossSell,
    Accessory,
    Bundle,
}

impl RecommendationType {
    /// Every member, in declaration order.
    pub const ALL: [RecommendationType; 4] = [
        RecommendationType::UpSell,
        RecommendationType::CrossSell,
        RecommendationType::Accessory,
        RecommendationType::Bundle,
    ];

    /// String name used for SQL storage and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::UpSell => "UP_SELL",
            RecommendationType::CrossSell => "CROSS_SELL",
            RecommendationType::Accessory => "ACCESSORY",
            RecommendationType::Bundle => "BUNDLE",
        }
    }
}

impl FromStr for RecommendationType {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DataValidationError::InvalidType(s.to_string()))
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
