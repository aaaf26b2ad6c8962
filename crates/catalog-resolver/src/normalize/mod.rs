//! Result normalization: heterogeneous stored rows → [`CanonicalRecord`].

pub mod affiliate;
pub mod image;
pub mod legacy_content;
pub mod price;
pub mod timestamp;

use catalog_core::config::ImageProxyConfig;
use catalog_core::constants::{
    DEFAULT_CURRENCY, ERROR_CATEGORY, ERROR_DESCRIPTION, ERROR_PRODUCT_NAME, NO_DESCRIPTION,
    UNTITLED_PRODUCT,
};
use catalog_core::errors::NormalizeError;
use catalog_core::models::{normalize_boolean, CanonicalRecord, ContentItem, Flag, FlagValue};
use tracing::warn;

use self::affiliate::affiliate_url;
use self::image::proxied_image;
use self::legacy_content::parse_legacy_content;
use self::price::parse_amount;
use self::timestamp::normalize_timestamp;

pub struct ResultNormalizer<'a> {
    images: &'a ImageProxyConfig,
}

impl<'a> ResultNormalizer<'a> {
    pub fn new(images: &'a ImageProxyConfig) -> Self {
        Self { images }
    }

    /// Normalize every row. A row that fails is replaced by an error marker;
    /// the batch always has one record per input row.
    pub fn normalize_batch(&self, rows: &[ContentItem]) -> Vec<CanonicalRecord> {
        rows.iter()
            .map(|row| match self.normalize(row) {
                Ok(record) => record,
                Err(e) => {
                    warn!(id = row.id, error = %e, "row replaced by error marker");
                    self.error_marker(row)
                }
            })
            .collect()
    }

    pub fn normalize(&self, item: &ContentItem) -> Result<CanonicalRecord, NormalizeError> {
        let mut price = item.price.as_deref().and_then(parse_amount);
        let mut original_price = item.original_price.as_deref().and_then(parse_amount);
        let mut currency = non_blank(item.currency.as_deref());
        let mut rating = item.rating.as_deref().and_then(parse_amount);
        let mut review_count = item.review_count;
        let mut discount = item.discount;

        // The legacy blob only fills gaps, it never overrides.
        let needs_legacy = price.is_none()
            || original_price.is_none()
            || rating.is_none()
            || discount.is_none();
        if let Some(content) = non_blank(item.content.as_deref()).filter(|_| needs_legacy) {
            let legacy = parse_legacy_content(item.id, &content)?;
            price = price.or(legacy.price);
            original_price = original_price.or(legacy.original_price);
            currency = currency.or(legacy.currency);
            rating = rating.or(legacy.rating);
            review_count = review_count.or(legacy.review_count);
            discount = discount.or(legacy.discount);
        }

        let created_at = normalize_timestamp(item.id, item.created_at.as_ref())?;

        Ok(CanonicalRecord {
            id: item.id,
            name: non_blank(item.title.as_deref()).unwrap_or_else(|| UNTITLED_PRODUCT.to_string()),
            description: non_blank(item.description.as_deref())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            price,
            original_price,
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            image_url: proxied_image(self.image_source(item).as_deref(), self.images),
            affiliate_url: affiliate_url(item),
            category: item.category.clone().unwrap_or_default(),
            subcategory: non_blank(item.subcategory.as_deref()),
            gender: non_blank(item.gender.as_deref()),
            rating: rating.unwrap_or(0.0),
            review_count: review_count.unwrap_or(0),
            discount,
            is_featured: item.flag(Flag::Featured),
            is_new: snake_or_camel_flag(item.is_new.as_ref(), item.is_new_camel.as_ref()),
            pricing_type: snake_or_camel(
                item.pricing_type.as_deref(),
                item.pricing_type_camel.as_deref(),
            ),
            monthly_price: snake_or_camel(
                item.monthly_price.as_deref(),
                item.monthly_price_camel.as_deref(),
            ),
            yearly_price: snake_or_camel(
                item.yearly_price.as_deref(),
                item.yearly_price_camel.as_deref(),
            ),
            is_free: snake_or_camel_flag(item.is_free.as_ref(), item.is_free_camel.as_ref()),
            price_description: snake_or_camel(
                item.price_description.as_deref(),
                item.price_description_camel.as_deref(),
            ),
            created_at,
        })
    }

    /// Safe stand-in for a row that could not be transformed.
    pub fn error_marker(&self, item: &ContentItem) -> CanonicalRecord {
        CanonicalRecord {
            id: item.id,
            name: non_blank(item.title.as_deref()).unwrap_or_else(|| ERROR_PRODUCT_NAME.to_string()),
            description: ERROR_DESCRIPTION.to_string(),
            price: Some(0.0),
            original_price: Some(0.0),
            currency: DEFAULT_CURRENCY.to_string(),
            image_url: self.images.placeholder.clone(),
            affiliate_url: None,
            category: ERROR_CATEGORY.to_string(),
            subcategory: None,
            gender: None,
            rating: 0.0,
            review_count: 0,
            discount: Some(0.0),
            is_featured: false,
            is_new: false,
            pricing_type: None,
            monthly_price: None,
            yearly_price: None,
            is_free: false,
            price_description: None,
            created_at: None,
        }
    }

    /// First entry of `media_urls`, then `imageUrl`, then `image_url`.
    fn image_source(&self, item: &ContentItem) -> Option<String> {
        if let Some(raw) = item.media_urls.as_deref() {
            match first_json_string(raw) {
                Ok(Some(url)) => return Some(url),
                Ok(None) => {}
                Err(e) => warn!(id = item.id, error = %e, "ignoring malformed media_urls"),
            }
        }
        non_blank(item.image_url_camel.as_deref()).or_else(|| non_blank(item.image_url.as_deref()))
    }
}

/// First non-blank string in a JSON array. Blank input is `Ok(None)`.
pub(crate) fn first_json_string(raw: &str) -> Result<Option<String>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    Ok(values
        .iter()
        .filter_map(serde_json::Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// The snake_case column when it holds text, else the camelCase one.
fn snake_or_camel(snake: Option<&str>, camel: Option<&str>) -> Option<String> {
    non_blank(snake).or_else(|| non_blank(camel))
}

/// A stored snake_case flag decides; the camelCase one only fills a NULL.
fn snake_or_camel_flag(snake: Option<&FlagValue>, camel: Option<&FlagValue>) -> bool {
    normalize_boolean(snake.or(camel))
}

#[cfg(test)]
mod tests {
    use catalog_core::models::{FlagValue, RawTimestamp};

    use super::*;

    fn normalizer_config() -> ImageProxyConfig {
        ImageProxyConfig::default()
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let config = normalizer_config();
        let record = ResultNormalizer::new(&config)
            .normalize(&ContentItem {
                id: 3,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(record.name, "Untitled Product");
        assert_eq!(record.description, "No description available");
        assert_eq!(record.currency, "INR");
        assert_eq!(record.image_url, "/api/placeholder/300/300");
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.review_count, 0);
        assert!(!record.is_featured);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn featured_text_true_is_normalized() {
        let config = normalizer_config();
        let record = ResultNormalizer::new(&config)
            .normalize(&ContentItem {
                id: 1,
                is_featured: Some(FlagValue::Text("TRUE".into())),
                ..Default::default()
            })
            .unwrap();
        assert!(record.is_featured);
    }

    #[test]
    fn image_precedence_and_proxy() {
        let config = normalizer_config();
        let n = ResultNormalizer::new(&config);
        let item = ContentItem {
            media_urls: Some(r#"["https://img.example/a.jpg"]"#.into()),
            image_url_camel: Some("/local/b.jpg".into()),
            image_url: Some("/local/c.jpg".into()),
            ..Default::default()
        };
        assert!(n.normalize(&item).unwrap().image_url.starts_with("/api/image-proxy?url=https%3A"));

        let malformed = ContentItem {
            media_urls: Some("{oops".into()),
            image_url: Some("/local/c.jpg".into()),
            ..Default::default()
        };
        assert_eq!(n.normalize(&malformed).unwrap().image_url, "/local/c.jpg");
    }

    #[test]
    fn legacy_content_fills_only_gaps() {
        let config = normalizer_config();
        let item = ContentItem {
            id: 5,
            price: Some("₹1,299".into()),
            content: Some(r#"{"price": 5, "originalPrice": "1,999", "rating": 4.5, "discount": 35}"#.into()),
            ..Default::default()
        };
        let record = ResultNormalizer::new(&config).normalize(&item).unwrap();
        assert_eq!(record.price, Some(1299.0));
        assert_eq!(record.original_price, Some(1999.0));
        assert_eq!(record.rating, 4.5);
        assert_eq!(record.discount, Some(35.0));
    }

    #[test]
    fn pricing_fields_prefer_snake_case_columns() {
        let config = normalizer_config();
        let item = ContentItem {
            id: 9,
            pricing_type: Some("  ".into()),
            pricing_type_camel: Some("subscription".into()),
            monthly_price: Some("₹499".into()),
            monthly_price_camel: Some("₹999".into()),
            yearly_price_camel: Some("4999".into()),
            is_free: Some(FlagValue::Integer(0)),
            is_free_camel: Some(FlagValue::Text("yes".into())),
            price_description: Some("Billed monthly".into()),
            is_new_camel: Some(FlagValue::Text("TRUE".into())),
            ..Default::default()
        };
        let record = ResultNormalizer::new(&config).normalize(&item).unwrap();
        assert_eq!(record.pricing_type.as_deref(), Some("subscription"));
        assert_eq!(record.monthly_price.as_deref(), Some("₹499"));
        assert_eq!(record.yearly_price.as_deref(), Some("4999"));
        assert!(!record.is_free);
        assert_eq!(record.price_description.as_deref(), Some("Billed monthly"));
        assert!(record.is_new);
    }

    #[test]
    fn missing_pricing_flags_are_false() {
        let config = normalizer_config();
        let record = ResultNormalizer::new(&config)
            .normalize(&ContentItem {
                id: 4,
                ..Default::default()
            })
            .unwrap();
        assert!(!record.is_free);
        assert!(!record.is_new);
        assert_eq!(record.pricing_type, None);
    }

    #[test]
    fn bad_row_becomes_error_marker_without_aborting() {
        let config = normalizer_config();
        let rows = vec![
            ContentItem {
                id: 1,
                title: Some("Good".into()),
                ..Default::default()
            },
            ContentItem {
                id: 2,
                content: Some("{not json".into()),
                ..Default::default()
            },
            ContentItem {
                id: 3,
                title: Some("Late".into()),
                created_at: Some(RawTimestamp::Text("someday".into())),
                ..Default::default()
            },
        ];
        let records = ResultNormalizer::new(&config).normalize_batch(&rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Good");
        assert!(records[1].is_error_marker());
        assert_eq!(records[1].name, "Product Error");
        assert_eq!(records[1].price, Some(0.0));
        assert!(records[2].is_error_marker());
        assert_eq!(records[2].name, "Late");
    }
}
