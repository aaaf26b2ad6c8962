// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "database.sqlite";
pub const DEFAULT_MMAP_SIZE: u64 = 268_435_456; // 256 MB
pub const DEFAULT_CACHE_SIZE: i64 = -64_000; // 64 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Retry ---
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1_000;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// --- Pagination ---
pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_MAX_LIMIT: u32 = 100;
pub const DEFAULT_ADMIN_MAX_LIMIT: u32 = 500;

// --- Image proxy ---
pub const DEFAULT_PROXY_ENDPOINT: &str = "/api/image-proxy";
pub const DEFAULT_PROXY_WIDTH: u32 = 400;
pub const DEFAULT_PROXY_HEIGHT: u32 = 400;
pub const DEFAULT_PROXY_QUALITY: u32 = 80;
pub const DEFAULT_PROXY_FORMAT: &str = "webp";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/300";

// --- Synonyms ---

/// Groups of interchangeable tokens. Every member expands to every other member.
pub const DEFAULT_SYNONYM_GROUPS: &[&[&str]] = &[
    &["tv", "television", "televisions"],
    &["laptop", "laptops", "notebook"],
    &["phone", "phones", "smartphone", "smartphones", "mobile"],
    &["headphone", "headphones", "earphones", "earbuds"],
    &["watch", "watches", "smartwatch"],
    &["shoe", "shoes", "footwear", "sneakers"],
    &["camera", "cameras"],
    &["gadget", "gadgets"],
    &["fridge", "refrigerator"],
    &["cosmetics", "makeup"],
    &["clothing", "apparel", "clothes"],
];

/// Alias phrase (lowercase) → canonical category name.
pub const DEFAULT_CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("electronics", "Electronics & Gadgets"),
    ("gadgets", "Electronics & Gadgets"),
    ("tech", "Electronics & Gadgets"),
    ("technology", "Electronics & Gadgets"),
    ("fashion", "Fashion & Clothing"),
    ("clothing", "Fashion & Clothing"),
    ("apparel", "Fashion & Clothing"),
    ("home", "Home & Kitchen"),
    ("kitchen", "Home & Kitchen"),
    ("beauty", "Health & Beauty"),
    ("health", "Health & Beauty"),
    ("sports", "Sports & Fitness"),
    ("fitness", "Sports & Fitness"),
    ("books", "Books & Education"),
    ("education", "Books & Education"),
    ("toys", "Toys & Games"),
    ("games", "Toys & Games"),
    ("travel", "Travel & Luggage"),
    ("ai apps", "Apps & AI Apps"),
    ("apps", "Apps & AI Apps"),
    ("services", "Services"),
];

/// Pages where rows with no display pages at all are still shown.
pub const DEFAULT_LEGACY_BLANK_PAGES: &[&str] = &["prime-picks"];

/// Pages eligible for the feature-flag fallback tier.
pub const DEFAULT_FEATURED_PAGES: &[&str] = &["top-picks"];

// --- Families ---
pub const DEFAULT_APPS_ALIASES: &[&str] = &["apps", "apps & ai apps", "ai apps", "ai apps & services"];
pub const DEFAULT_APPS_PAGES: &[&str] = &["apps", "apps-ai-apps"];
pub const DEFAULT_APPS_KEYWORDS: &[&str] = &["app", "apps", "application", "applications"];
pub const DEFAULT_APPS_CATEGORY_TERMS: &[&str] = &["app", "ai"];

pub const DEFAULT_SERVICES_ALIASES: &[&str] = &["services", "service", "technology services"];
pub const DEFAULT_SERVICES_PAGES: &[&str] = &["services"];
pub const DEFAULT_SERVICES_KEYWORDS: &[&str] = &["service", "services"];
pub const DEFAULT_SERVICES_CATEGORY_TERMS: &[&str] = &["service"];

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "catalog=info";
