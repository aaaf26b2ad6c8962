use catalog_core::models::Predicate;
use serde::{Deserialize, Serialize};

/// Matching strategies, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Name, child, token and page rules as requested.
    Primary,
    /// Only the family flag rule (service/app).
    FlagOnly,
    /// Only membership in the matched parent's children.
    ParentBroadening,
    /// Featured flag, page membership, or page type (featured pages only).
    FeatureFlag,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::FlagOnly => "flag_only",
            Self::ParentBroadening => "parent_broadening",
            Self::FeatureFlag => "feature_flag",
        }
    }
}

/// A tier with its complete, gated predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPlan {
    pub tier: Tier,
    pub predicate: Predicate,
}
