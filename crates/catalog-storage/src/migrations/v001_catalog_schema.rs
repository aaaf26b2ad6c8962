//! v001: categories + unified_content.
//!
//! Flag and timestamp columns are declared without a type so legacy values
//! (integers, "true"/"yes" strings, ISO text) are stored exactly as written.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    parent_id INTEGER REFERENCES categories(id),
    is_active,
    display_order INTEGER NOT NULL DEFAULT 0,
    is_for_products,
    is_for_services,
    is_for_ai_apps,
    created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

CREATE TABLE IF NOT EXISTS unified_content (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    price TEXT,
    original_price TEXT,
    currency TEXT,
    media_urls TEXT,
    imageUrl TEXT,
    image_url TEXT,
    affiliate_url TEXT,
    affiliateUrl TEXT,
    affiliate_link TEXT,
    affiliate_urls TEXT,
    category TEXT,
    subcategory TEXT,
    tags TEXT,
    display_pages TEXT DEFAULT '["home"]',
    page_type TEXT,
    gender TEXT,
    rating TEXT,
    review_count INTEGER,
    discount REAL,
    is_service,
    is_ai_app,
    is_featured,
    featured,
    status TEXT,
    visibility TEXT,
    processing_status TEXT,
    content TEXT,
    created_at,
    pricing_type TEXT,
    pricingType TEXT,
    monthly_price TEXT,
    monthlyPrice TEXT,
    yearly_price TEXT,
    yearlyPrice TEXT,
    is_free,
    isFree,
    price_description TEXT,
    priceDescription TEXT,
    is_new,
    isNew
);
"#;
