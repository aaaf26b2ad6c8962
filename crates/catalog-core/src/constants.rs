//! Fixed strings shared by the resolver and the storage adapter.

/// Stored string values that count as a set flag (compared case-insensitively,
/// after trimming). The integer `1` and native `true` are also truthy.
pub const TRUTHY_STRINGS: &[&str] = &["1", "true", "yes", "y", "on"];

/// Whitespace stripped before comparing stored text. Matches SQLite's
/// `trim(x, char(32, 9, 10, 11, 12, 13))`.
pub const ASCII_WS: &[char] = &[' ', '\t', '\n', '\u{b}', '\u{c}', '\r'];

/// `status` values that pass the publication gate. NULL also passes.
pub const PUBLISHED_STATUSES: &[&str] = &["active", "published", "ready", "processed", "completed"];

/// `visibility` values that pass the publication gate. NULL also passes.
pub const PUBLIC_VISIBILITIES: &[&str] = &["public", "visible"];

/// `processing_status` value that fails the publication gate.
pub const ARCHIVED_PROCESSING_STATUS: &str = "archived";

/// Sentinel meaning "no filter" for gender and secondary category filters.
pub const ALL_SENTINEL: &str = "all";

pub const UNTITLED_PRODUCT: &str = "Untitled Product";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_CURRENCY: &str = "INR";

/// Error-marker record fields.
pub const ERROR_CATEGORY: &str = "Error";
pub const ERROR_PRODUCT_NAME: &str = "Product Error";
pub const ERROR_DESCRIPTION: &str = "Error loading product details";
