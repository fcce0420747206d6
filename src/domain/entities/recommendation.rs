//! Recommendation entity pairing two product SKUs with a category.

use std::fmt;

use serde_json::{Map, Value, json};

use crate::domain::entities::RecommendationType;
use crate::domain::validation::DataValidationError;

/// A directed pairing of two SKUs: product B is suggested alongside product A.
///
/// `id` is `None` until the record is persisted and is assigned by the store.
/// Construction performs no validation; invalid SKUs are rejected by
/// [`Recommendation::validate`] and by every repository write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: Option<i64>,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: RecommendationType,
}

impl Recommendation {
    /// Creates a transient (unpersisted) recommendation.
    pub fn new(
        product_a_sku: impl Into<String>,
        product_b_sku: impl Into<String>,
        recommendation_type: RecommendationType,
    ) -> Self {
        Self {
            id: None,
            product_a_sku: product_a_sku.into(),
            product_b_sku: product_b_sku.into(),
            recommendation_type,
        }
    }

    /// Returns true once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the rules a record must satisfy before it can be written.
    ///
    /// # Errors
    ///
    /// Returns [`DataValidationError::EmptyField`] if either SKU is empty or blank.
    pub fn validate(&self) -> Result<(), DataValidationError> {
        if self.product_a_sku.trim().is_empty() {
            return Err(DataValidationError::EmptyField("product_a_sku"));
        }
        if self.product_b_sku.trim().is_empty() {
            return Err(DataValidationError::EmptyField("product_b_sku"));
        }
        Ok(())
    }

    /// Serializes the public fields into a JSON object.
    ///
    /// `type` is rendered by name and `id` is `null` for transient records.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "product_a_sku": self.product_a_sku,
            "product_b_sku": self.product_b_sku,
            "type": self.recommendation_type.as_str(),
        })
    }

    /// Overwrites the SKUs and type from a JSON mapping.
    ///
    /// `id` is store-managed and never read from `data`. On error the
    /// recommendation is left untouched.
    ///
    /// # Errors
    ///
    /// - [`DataValidationError::MalformedBody`] if `data` is not an object
    /// - [`DataValidationError::MissingField`] if a required key is absent
    /// - [`DataValidationError::InvalidFieldType`] if a value is not a string
    /// - [`DataValidationError::InvalidType`] if `type` is not a known member
    pub fn deserialize(&mut self, data: &Value) -> Result<(), DataValidationError> {
        let (product_a_sku, product_b_sku, recommendation_type) = parse_fields(data)?;

        self.product_a_sku = product_a_sku;
        self.product_b_sku = product_b_sku;
        self.recommendation_type = recommendation_type;
        Ok(())
    }
}

impl TryFrom<&Value> for Recommendation {
    type Error = DataValidationError;

    /// Builds a transient recommendation from a JSON mapping.
    fn try_from(data: &Value) -> Result<Self, Self::Error> {
        let (product_a_sku, product_b_sku, recommendation_type) = parse_fields(data)?;
        Ok(Self::new(product_a_sku, product_b_sku, recommendation_type))
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "None".to_string(), |id| id.to_string());
        write!(
            f,
            "<Recommendation {}-{} id=[{}]>",
            self.product_a_sku, self.product_b_sku, id
        )
    }
}

fn parse_fields(data: &Value) -> Result<(String, String, RecommendationType), DataValidationError> {
    let map = data.as_object().ok_or(DataValidationError::MalformedBody)?;

    let product_a_sku = required_str(map, "product_a_sku")?;
    let product_b_sku = required_str(map, "product_b_sku")?;
    let recommendation_type = required_str(map, "type")?.parse::<RecommendationType>()?;

    Ok((product_a_sku, product_b_sku, recommendation_type))
}

fn required_str(map: &Map<String, Value>, field: &'static str) -> Result<String, DataValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(DataValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DataValidationError::InvalidFieldType {
            field,
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recommendation {
        Recommendation::new("AA0001", "AA0002", RecommendationType::UpSell)
    }

    #[test]
    fn test_recommendation_creation() {
        let rec = sample();

        assert!(rec.id.is_none());
        assert!(!rec.is_persisted());
        assert_eq!(rec.product_a_sku, "AA0001");
        assert_eq!(rec.product_b_sku, "AA0002");
        assert_eq!(rec.recommendation_type, RecommendationType::UpSell);
        assert_eq!(rec.to_string(), "<Recommendation AA0001-AA0002 id=[None]>");

        let rec = Recommendation::new("AB1111", "BA2222", RecommendationType::CrossSell);
        assert_eq!(rec.product_a_sku, "AB1111");
        assert_eq!(rec.product_b_sku, "BA2222");
        assert_eq!(rec.recommendation_type, RecommendationType::CrossSell);
    }

    #[test]
    fn test_display_with_id() {
        let mut rec = sample();
        rec.id = Some(42);

        assert_eq!(rec.to_string(), "<Recommendation AA0001-AA0002 id=[42]>");
    }

    #[test]
    fn test_construction_does_not_validate() {
        let rec = Recommendation::new("", "B1", RecommendationType::Bundle);

        assert_eq!(rec.product_a_sku, "");
        assert_eq!(
            rec.validate(),
            Err(DataValidationError::EmptyField("product_a_sku"))
        );
    }

    #[test]
    fn test_validate_rejects_blank_sku() {
        let rec = Recommendation::new("A1", "   ", RecommendationType::Accessory);

        assert_eq!(
            rec.validate(),
            Err(DataValidationError::EmptyField("product_b_sku"))
        );
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_serialize() {
        let mut rec = sample();
        rec.id = Some(3);

        let data = rec.serialize();

        assert_eq!(data["id"], 3);
        assert_eq!(data["product_a_sku"], "AA0001");
        assert_eq!(data["product_b_sku"], "AA0002");
        assert_eq!(data["type"], "UP_SELL");
        assert_eq!(data.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_serialize_transient_has_null_id() {
        assert!(sample().serialize()["id"].is_null());
    }

    #[test]
    fn test_serialize_then_deserialize_reproduces_fields() {
        let original = Recommendation::new("X9", "Y9", RecommendationType::Accessory);
        let data = original.serialize();

        let mut copy = Recommendation::new("", "", RecommendationType::UpSell);
        copy.deserialize(&data).unwrap();

        assert_eq!(copy, original);
    }

    #[test]
    fn test_deserialize_ignores_id() {
        let mut rec = sample();
        rec.deserialize(&json!({
            "id": 99,
            "product_a_sku": "C1",
            "product_b_sku": "D1",
            "type": "BUNDLE"
        }))
        .unwrap();

        assert!(rec.id.is_none());
        assert_eq!(rec.product_a_sku, "C1");
        assert_eq!(rec.recommendation_type, RecommendationType::Bundle);
    }

    #[test]
    fn test_deserialize_missing_field() {
        let mut rec = sample();
        let result = rec.deserialize(&json!({
            "product_b_sku": "B1",
            "type": "UP_SELL"
        }));

        assert_eq!(
            result,
            Err(DataValidationError::MissingField("product_a_sku"))
        );
        // left untouched on failure
        assert_eq!(rec, sample());
    }

    #[test]
    fn test_deserialize_null_counts_as_missing() {
        let result = Recommendation::try_from(&json!({
            "product_a_sku": "A1",
            "product_b_sku": null,
            "type": "UP_SELL"
        }));

        assert_eq!(
            result,
            Err(DataValidationError::MissingField("product_b_sku"))
        );
    }

    #[test]
    fn test_deserialize_invalid_type() {
        let result = Recommendation::try_from(&json!({
            "product_a_sku": "A1",
            "product_b_sku": "B1",
            "type": "NOT_A_TYPE"
        }));

        assert_eq!(
            result,
            Err(DataValidationError::InvalidType("NOT_A_TYPE".to_string()))
        );
    }

    #[test]
    fn test_deserialize_wrong_value_type() {
        let result = Recommendation::try_from(&json!({
            "product_a_sku": 12345,
            "product_b_sku": "B1",
            "type": "UP_SELL"
        }));

        assert!(matches!(
            result,
            Err(DataValidationError::InvalidFieldType {
                field: "product_a_sku",
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_malformed_body() {
        for body in [json!("just a string"), json!([1, 2, 3]), Value::Null] {
            assert_eq!(
                Recommendation::try_from(&body),
                Err(DataValidationError::MalformedBody)
            );
        }
    }
}
