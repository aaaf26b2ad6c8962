//! Resolution requests and their parsing from raw transport parameters.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::constants::ALL_SENTINEL;
use crate::errors::RequestError;

/// What a request asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionTarget {
    Category {
        value: String,
    },
    Page {
        slug: String,
        /// Secondary category filter, ANDed with the page rule.
        category: Option<String>,
    },
}

/// Which limit clamp applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingScope {
    #[default]
    Public,
    /// Unrestricted admin listing: higher limit ceiling, same publication gate.
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    pub limit: u32,
    pub offset: u64,
}

impl PageWindow {
    /// Clamp limit to `[1, max]` for the scope and offset to `>= 0`.
    /// Missing values take the configured defaults.
    pub fn clamped(
        limit: Option<i64>,
        offset: Option<i64>,
        scope: ListingScope,
        pagination: &PaginationConfig,
    ) -> Self {
        let max = match scope {
            ListingScope::Public => pagination.max_limit,
            ListingScope::Admin => pagination.admin_max_limit,
        }
        .max(1);
        let limit = limit
            .unwrap_or(i64::from(pagination.default_limit))
            .clamp(1, i64::from(max));
        let offset = offset.unwrap_or(0).max(0);
        Self {
            limit: limit as u32,
            offset: offset as u64,
        }
    }
}

/// Untyped request parameters as they arrive from the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawResolutionParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionRequest {
    pub target: ResolutionTarget,
    pub window: PageWindow,
    /// Case-insensitive equality filter. `None` means any gender.
    pub gender: Option<String>,
}

impl ResolutionRequest {
    pub fn category(value: impl Into<String>, window: PageWindow) -> Self {
        Self {
            target: ResolutionTarget::Category {
                value: value.into(),
            },
            window,
            gender: None,
        }
    }

    pub fn page(slug: impl Into<String>, category: Option<String>, window: PageWindow) -> Self {
        Self {
            target: ResolutionTarget::Page {
                slug: slug.into(),
                category: category.and_then(filter_value),
            },
            window,
            gender: None,
        }
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender.and_then(filter_value);
        self
    }

    /// Parse a resolve-by-category request. `category` is required.
    pub fn from_category_params(
        raw: &RawResolutionParams,
        scope: ListingScope,
        pagination: &PaginationConfig,
    ) -> Result<Self, RequestError> {
        let category = required(raw.category.as_deref(), "category")?;
        let window = parse_window(raw, scope, pagination)?;
        Ok(Self::category(category, window).with_gender(raw.gender.clone()))
    }

    /// Parse a resolve-by-page request. `page` is required, `category` optional.
    pub fn from_page_params(
        raw: &RawResolutionParams,
        scope: ListingScope,
        pagination: &PaginationConfig,
    ) -> Result<Self, RequestError> {
        let slug = required(raw.page.as_deref(), "page")?;
        let window = parse_window(raw, scope, pagination)?;
        Ok(Self::page(slug, raw.category.clone(), window).with_gender(raw.gender.clone()))
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, RequestError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(RequestError::MissingField { field }),
    }
}

fn parse_window(
    raw: &RawResolutionParams,
    scope: ListingScope,
    pagination: &PaginationConfig,
) -> Result<PageWindow, RequestError> {
    let limit = parse_int(raw.limit.as_deref(), "limit")?;
    let offset = parse_int(raw.offset.as_deref(), "offset")?;
    Ok(PageWindow::clamped(limit, offset, scope, pagination))
}

fn parse_int(value: Option<&str>, field: &'static str) -> Result<Option<i64>, RequestError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| RequestError::InvalidNumber {
                field,
                value: v.to_string(),
            }),
    }
}

/// Blank and the `"all"` sentinel both mean "no filter".
fn filter_value(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
