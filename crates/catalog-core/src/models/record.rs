use serde::{Deserialize, Serialize};

/// Canonical output record handed to the transport layer.
///
/// Numeric fields are already parsed; `image_url` is already rewritten
/// through the image proxy. Field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub currency: String,
    pub image_url: String,
    pub affiliate_url: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub gender: Option<String>,
    pub rating: f64,
    pub review_count: i64,
    pub discount: Option<f64>,
    pub is_featured: bool,
    pub is_new: bool,
    /// Pricing model of a service or app, e.g. "free" or "subscription".
    pub pricing_type: Option<String>,
    pub monthly_price: Option<String>,
    pub yearly_price: Option<String>,
    pub is_free: bool,
    pub price_description: Option<String>,
    pub created_at: Option<String>,
}

impl CanonicalRecord {
    /// Whether this record is the stand-in for a row that failed to transform.
    pub fn is_error_marker(&self) -> bool {
        self.category == crate::constants::ERROR_CATEGORY
    }
}
