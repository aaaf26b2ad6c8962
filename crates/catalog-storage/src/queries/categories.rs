//! Queries for the categories table.

use catalog_core::errors::StorageError;
use catalog_core::models::{normalize_boolean, Category};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::values;
use crate::sql::truthy_sql;
use crate::to_storage_err;

const CATEGORY_COLUMNS: &str = "id, name, parent_id, is_active, display_order,
     is_for_products, is_for_services, is_for_ai_apps";

/// NULL `is_active` counts as active.
fn active_clause() -> String {
    format!("(is_active IS NULL OR {})", truthy_sql("is_active"))
}

fn parse_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    let flag_or = |idx: usize, default: bool| -> rusqlite::Result<bool> {
        Ok(values::flag(row, idx)?.map_or(default, |v| normalize_boolean(Some(&v))))
    };
    Ok(Category {
        id: row.get(0)?,
        name: values::text(row, 1)?.unwrap_or_default(),
        parent_id: values::integer(row, 2)?,
        is_active: flag_or(3, true)?,
        display_order: values::integer(row, 4)?.unwrap_or(0),
        is_for_products: flag_or(5, true)?,
        is_for_services: flag_or(6, false)?,
        is_for_ai_apps: flag_or(7, false)?,
    })
}

/// Active category named `name` (ASCII case-insensitive). An exact-case
/// match wins, then top-level rows over children, then lower display order.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Category>, StorageError> {
    let sql = format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories
         WHERE lower(name) = lower(?1) AND {active}
         ORDER BY (name != ?1), (parent_id IS NOT NULL), display_order, id
         LIMIT 1",
        active = active_clause()
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    stmt.query_row(params![name.trim()], parse_category)
        .optional()
        .map_err(to_storage_err)
}

/// Active children of `parent_id` ordered by `(display_order, name)`.
/// A row naming itself as parent is not its own child.
pub fn active_children(conn: &Connection, parent_id: i64) -> Result<Vec<Category>, StorageError> {
    let sql = format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories
         WHERE parent_id = ?1 AND id != ?1 AND {active}
         ORDER BY display_order ASC, name ASC, id ASC",
        active = active_clause()
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![parent_id], parse_category)
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Active top-level categories ordered by `(display_order, name)`.
pub fn active_top_level(conn: &Connection) -> Result<Vec<Category>, StorageError> {
    let sql = format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories
         WHERE parent_id IS NULL AND {active}
         ORDER BY display_order ASC, name ASC, id ASC",
        active = active_clause()
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt.query_map([], parse_category).map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Insert a category row. An `id` of 0 lets SQLite assign one.
pub fn insert_category(conn: &Connection, category: &Category) -> Result<i64, StorageError> {
    let id = if category.id > 0 {
        Value::Integer(category.id)
    } else {
        Value::Null
    };
    let bound = [
        id,
        Value::Text(category.name.clone()),
        category.parent_id.map_or(Value::Null, Value::Integer),
        Value::Integer(i64::from(category.is_active)),
        Value::Integer(category.display_order),
        Value::Integer(i64::from(category.is_for_products)),
        Value::Integer(i64::from(category.is_for_services)),
        Value::Integer(i64::from(category.is_for_ai_apps)),
    ];
    conn.execute(
        &format!("INSERT INTO categories ({CATEGORY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        params_from_iter(bound.iter()),
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}
