//! DTOs for recommendation endpoints.
//!
//! Request and response bodies use [`Recommendation::serialize`] and
//! [`Recommendation::deserialize`] directly; only the list query needs its
//! own type.
//!
//! [`Recommendation::serialize`]: crate::domain::entities::Recommendation::serialize
//! [`Recommendation::deserialize`]: crate::domain::entities::Recommendation::deserialize

use serde::Deserialize;

use crate::domain::DataValidationError;
use crate::domain::entities::RecommendationType;
use crate::domain::repositories::RecommendationFilter;

/// Query string for `GET /recommendations`.
///
/// Every parameter is optional and narrows the result by equality.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub product_a_sku: Option<String>,
    pub product_b_sku: Option<String>,
    #[serde(rename = "type")]
    pub recommendation_type: Option<String>,
}

impl TryFrom<RecommendationQuery> for RecommendationFilter {
    type Error = DataValidationError;

    fn try_from(query: RecommendationQuery) -> Result<Self, Self::Error> {
        let recommendation_type = query
            .recommendation_type
            .as_deref()
            .map(str::parse::<RecommendationType>)
            .transpose()?;

        Ok(RecommendationFilter {
            product_a_sku: query.product_a_sku,
            product_b_sku: query.product_b_sku,
            recommendation_type,
        })
    }
}
