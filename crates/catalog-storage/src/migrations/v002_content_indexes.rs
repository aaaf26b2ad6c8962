//! v002: lookup indexes for category resolution and newest-first listing.

pub const MIGRATION_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(lower(name));
CREATE INDEX IF NOT EXISTS idx_categories_parent ON categories(parent_id, display_order, name);
CREATE INDEX IF NOT EXISTS idx_content_category ON unified_content(lower(category));
CREATE INDEX IF NOT EXISTS idx_content_created ON unified_content(created_at DESC, id DESC);
"#;
