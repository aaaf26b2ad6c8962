use serde::{Deserialize, Serialize};

/// A row of the hierarchical taxonomy. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// `None` for top-level (parent) categories.
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_true")]
    pub is_for_products: bool,
    #[serde(default)]
    pub is_for_services: bool,
    #[serde(default, rename = "isForAIApps")]
    pub is_for_ai_apps: bool,
}

fn default_true() -> bool {
    true
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// One entry of a "list children" response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildCategory {
    pub name: String,
}

/// Which kind of rows a category browse counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    All,
    /// Rows flagged neither service nor AI app.
    Products,
    Services,
    AiApps,
}

impl Surface {
    /// Lenient parse of a `type` parameter. Blank or unknown means `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("products") => Self::Products,
            Some("services") => Self::Services,
            Some("aiapps") => Self::AiApps,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Products => "products",
            Self::Services => "services",
            Self::AiApps => "aiapps",
        }
    }
}

/// A top-level category that has published rows on a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsedCategory {
    pub id: i64,
    pub name: String,
    pub display_order: i64,
    pub is_for_products: bool,
    pub is_for_services: bool,
    #[serde(rename = "isForAIApps")]
    pub is_for_ai_apps: bool,
    /// Published rows filed under the category on the surface.
    pub total_count: u64,
    /// The subset of `total_count` flagged as services.
    pub services_count: u64,
    /// The subset of `total_count` flagged as AI apps.
    pub apps_count: u64,
}
