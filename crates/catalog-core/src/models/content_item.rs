//! Raw catalog rows as they sit in the content store.
//!
//! Several concepts exist under more than one historical column name
//! (`imageUrl`/`image_url`, three affiliate link columns, `is_featured`/
//! `featured`, and the snake/camel pairs of the pricing columns). The row
//! keeps every variant; the normalizer decides.

use serde::{Deserialize, Serialize};

use super::flag::{normalize_boolean, FlagValue};
use super::predicate::{Column, Flag};

/// `created_at` is an integer epoch on most rows and text on imported ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub original_price: Option<String>,
    pub currency: Option<String>,

    /// JSON list of media URLs; the first entry is the preferred image.
    pub media_urls: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url_camel: Option<String>,
    pub image_url: Option<String>,

    pub affiliate_url: Option<String>,
    #[serde(rename = "affiliateUrl")]
    pub affiliate_url_camel: Option<String>,
    pub affiliate_link: Option<String>,
    /// JSON list of affiliate URLs.
    pub affiliate_urls: Option<String>,

    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Comma-delimited free text.
    pub tags: Option<String>,
    /// Comma-delimited slugs, or a JSON array on legacy rows.
    pub display_pages: Option<String>,
    pub page_type: Option<String>,
    pub gender: Option<String>,

    pub rating: Option<String>,
    pub review_count: Option<i64>,
    pub discount: Option<f64>,

    pub is_service: Option<FlagValue>,
    pub is_ai_app: Option<FlagValue>,
    pub is_featured: Option<FlagValue>,
    /// Older name of `is_featured`.
    pub featured: Option<FlagValue>,

    pub status: Option<String>,
    pub visibility: Option<String>,
    pub processing_status: Option<String>,

    /// Legacy JSON blob carrying pricing/rating fields on old rows.
    pub content: Option<String>,
    pub created_at: Option<RawTimestamp>,

    /// Service and app pricing. Each is stored under a snake_case and a
    /// camelCase column depending on which importer wrote the row.
    pub pricing_type: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type_camel: Option<String>,
    pub monthly_price: Option<String>,
    #[serde(rename = "monthlyPrice")]
    pub monthly_price_camel: Option<String>,
    pub yearly_price: Option<String>,
    #[serde(rename = "yearlyPrice")]
    pub yearly_price_camel: Option<String>,
    pub is_free: Option<FlagValue>,
    #[serde(rename = "isFree")]
    pub is_free_camel: Option<FlagValue>,
    pub price_description: Option<String>,
    #[serde(rename = "priceDescription")]
    pub price_description_camel: Option<String>,
    pub is_new: Option<FlagValue>,
    #[serde(rename = "isNew")]
    pub is_new_camel: Option<FlagValue>,
}

impl ContentItem {
    /// Text value of a filterable column.
    pub fn column(&self, column: Column) -> Option<&str> {
        match column {
            Column::Category => self.category.as_deref(),
            Column::Subcategory => self.subcategory.as_deref(),
            Column::Tags => self.tags.as_deref(),
            Column::DisplayPages => self.display_pages.as_deref(),
            Column::PageType => self.page_type.as_deref(),
            Column::Gender => self.gender.as_deref(),
            Column::Status => self.status.as_deref(),
            Column::Visibility => self.visibility.as_deref(),
            Column::ProcessingStatus => self.processing_status.as_deref(),
        }
    }

    /// Whether a flag is set under any of its stored names.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Service => normalize_boolean(self.is_service.as_ref()),
            Flag::AiApp => normalize_boolean(self.is_ai_app.as_ref()),
            Flag::Featured => {
                normalize_boolean(self.is_featured.as_ref())
                    || normalize_boolean(self.featured.as_ref())
            }
        }
    }
}
