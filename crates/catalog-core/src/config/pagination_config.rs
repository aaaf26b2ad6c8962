use serde::{Deserialize, Serialize};

use super::defaults;

/// Limit defaults and clamps for resolution requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_limit: u32,
    /// Upper clamp for public listings.
    pub max_limit: u32,
    /// Upper clamp for the admin listing variant.
    pub admin_max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_LIMIT,
            max_limit: defaults::DEFAULT_MAX_LIMIT,
            admin_max_limit: defaults::DEFAULT_ADMIN_MAX_LIMIT,
        }
    }
}
