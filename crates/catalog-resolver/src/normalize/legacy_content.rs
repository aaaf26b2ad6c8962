//! The legacy `content` JSON blob carried by older rows.

use catalog_core::errors::NormalizeError;
use serde_json::{Map, Value};

use super::price::json_amount;

/// Pricing and rating fields recovered from a legacy blob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyContent {
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub currency: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub discount: Option<f64>,
}

pub fn parse_legacy_content(id: i64, raw: &str) -> Result<LegacyContent, NormalizeError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| NormalizeError::LegacyContent {
        id,
        reason: e.to_string(),
    })?;
    let Value::Object(map) = value else {
        return Err(NormalizeError::LegacyContent {
            id,
            reason: "not a JSON object".to_string(),
        });
    };

    Ok(LegacyContent {
        price: amount(&map, &["price"]),
        original_price: amount(&map, &["originalPrice", "original_price"]),
        currency: map
            .get("currency")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from),
        rating: amount(&map, &["rating"]),
        review_count: amount(&map, &["reviewCount", "review_count"]).map(|n| n as i64),
        discount: amount(&map, &["discount"]),
    })
}

fn amount(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| map.get(*key).and_then(json_amount))
}
