//! Queries for the unified_content table, filtered by compiled predicates.

use catalog_core::errors::StorageError;
use catalog_core::models::{Column, ContentItem, PageWindow, Predicate, RawTimestamp};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

use super::values;
use crate::sql::{compile, ORDER_BY_NEWEST};
use crate::to_storage_err;

/// Columns read for every content row (43 columns, indices 0-42).
const CONTENT_COLUMNS: &str = "id, title, description, price, original_price, currency,
     media_urls, imageUrl, image_url, affiliate_url, affiliateUrl, affiliate_link,
     affiliate_urls, category, subcategory, tags, display_pages, page_type, gender,
     rating, review_count, discount, is_service, is_ai_app, is_featured, featured,
     status, visibility, processing_status, content, created_at,
     pricing_type, pricingType, monthly_price, monthlyPrice, yearly_price, yearlyPrice,
     is_free, isFree, price_description, priceDescription, is_new, isNew";

fn parse_content_row(row: &Row<'_>) -> rusqlite::Result<ContentItem> {
    Ok(ContentItem {
        id: row.get(0)?,
        title: values::text(row, 1)?,
        description: values::text(row, 2)?,
        price: values::text(row, 3)?,
        original_price: values::text(row, 4)?,
        currency: values::text(row, 5)?,
        media_urls: values::text(row, 6)?,
        image_url_camel: values::text(row, 7)?,
        image_url: values::text(row, 8)?,
        affiliate_url: values::text(row, 9)?,
        affiliate_url_camel: values::text(row, 10)?,
        affiliate_link: values::text(row, 11)?,
        affiliate_urls: values::text(row, 12)?,
        category: values::text(row, 13)?,
        subcategory: values::text(row, 14)?,
        tags: values::text(row, 15)?,
        display_pages: values::text(row, 16)?,
        page_type: values::text(row, 17)?,
        gender: values::text(row, 18)?,
        rating: values::text(row, 19)?,
        review_count: values::integer(row, 20)?,
        discount: values::real(row, 21)?,
        is_service: values::flag(row, 22)?,
        is_ai_app: values::flag(row, 23)?,
        is_featured: values::flag(row, 24)?,
        featured: values::flag(row, 25)?,
        status: values::text(row, 26)?,
        visibility: values::text(row, 27)?,
        processing_status: values::text(row, 28)?,
        content: values::text(row, 29)?,
        created_at: values::timestamp(row, 30)?,
        pricing_type: values::text(row, 31)?,
        pricing_type_camel: values::text(row, 32)?,
        monthly_price: values::text(row, 33)?,
        monthly_price_camel: values::text(row, 34)?,
        yearly_price: values::text(row, 35)?,
        yearly_price_camel: values::text(row, 36)?,
        is_free: values::flag(row, 37)?,
        is_free_camel: values::flag(row, 38)?,
        price_description: values::text(row, 39)?,
        price_description_camel: values::text(row, 40)?,
        is_new: values::flag(row, 41)?,
        is_new_camel: values::flag(row, 42)?,
    })
}

/// Number of rows the predicate selects.
pub fn count_matching(conn: &Connection, predicate: &Predicate) -> Result<u64, StorageError> {
    let compiled = compile(predicate);
    let sql = format!("SELECT COUNT(*) FROM unified_content WHERE {}", compiled.sql);
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let count: i64 = stmt
        .query_row(params_from_iter(compiled.params.iter()), |row| row.get(0))
        .map_err(to_storage_err)?;
    Ok(count.max(0) as u64)
}

/// One window of the rows the predicate selects, newest first.
pub fn query_matching(
    conn: &Connection,
    predicate: &Predicate,
    window: PageWindow,
) -> Result<Vec<ContentItem>, StorageError> {
    let compiled = compile(predicate);
    let sql = format!(
        "SELECT {CONTENT_COLUMNS} FROM unified_content WHERE {} {ORDER_BY_NEWEST} LIMIT ? OFFSET ?",
        compiled.sql
    );
    let mut bound = compiled.params;
    bound.push(Value::Integer(i64::from(window.limit)));
    bound.push(Value::Integer(i64::try_from(window.offset).unwrap_or(i64::MAX)));

    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params_from_iter(bound.iter()), parse_content_row)
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Distinct trimmed, non-blank values of `column` among selected rows, ascending.
pub fn distinct_values(
    conn: &Connection,
    column: Column,
    predicate: &Predicate,
) -> Result<Vec<String>, StorageError> {
    let compiled = compile(predicate);
    let col = column.name();
    let sql = format!(
        "SELECT DISTINCT trim({col}, char(32, 9, 10, 11, 12, 13)) AS value
         FROM unified_content
         WHERE {} AND {col} IS NOT NULL AND trim({col}, char(32, 9, 10, 11, 12, 13)) != ''
         ORDER BY value",
        compiled.sql
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params_from_iter(compiled.params.iter()), |row| values::text(row, 0))
        .map_err(to_storage_err)?;
    let mut out = Vec::new();
    for value in rows {
        if let Some(v) = value.map_err(to_storage_err)? {
            out.push(v);
        }
    }
    Ok(out)
}

/// Insert a content row exactly as given. An `id` of 0 lets SQLite assign one.
pub fn insert_content(conn: &Connection, item: &ContentItem) -> Result<i64, StorageError> {
    let bound = [
        if item.id > 0 {
            Value::Integer(item.id)
        } else {
            Value::Null
        },
        values::opt_text(item.title.as_ref()),
        values::opt_text(item.description.as_ref()),
        values::opt_text(item.price.as_ref()),
        values::opt_text(item.original_price.as_ref()),
        values::opt_text(item.currency.as_ref()),
        values::opt_text(item.media_urls.as_ref()),
        values::opt_text(item.image_url_camel.as_ref()),
        values::opt_text(item.image_url.as_ref()),
        values::opt_text(item.affiliate_url.as_ref()),
        values::opt_text(item.affiliate_url_camel.as_ref()),
        values::opt_text(item.affiliate_link.as_ref()),
        values::opt_text(item.affiliate_urls.as_ref()),
        values::opt_text(item.category.as_ref()),
        values::opt_text(item.subcategory.as_ref()),
        values::opt_text(item.tags.as_ref()),
        values::opt_text(item.display_pages.as_ref()),
        values::opt_text(item.page_type.as_ref()),
        values::opt_text(item.gender.as_ref()),
        values::opt_text(item.rating.as_ref()),
        item.review_count.map_or(Value::Null, Value::Integer),
        item.discount.map_or(Value::Null, Value::Real),
        values::flag_value(item.is_service.as_ref()),
        values::flag_value(item.is_ai_app.as_ref()),
        values::flag_value(item.is_featured.as_ref()),
        values::flag_value(item.featured.as_ref()),
        values::opt_text(item.status.as_ref()),
        values::opt_text(item.visibility.as_ref()),
        values::opt_text(item.processing_status.as_ref()),
        values::opt_text(item.content.as_ref()),
        match &item.created_at {
            None => Value::Null,
            Some(RawTimestamp::Integer(i)) => Value::Integer(*i),
            Some(RawTimestamp::Text(s)) => Value::Text(s.clone()),
        },
        values::opt_text(item.pricing_type.as_ref()),
        values::opt_text(item.pricing_type_camel.as_ref()),
        values::opt_text(item.monthly_price.as_ref()),
        values::opt_text(item.monthly_price_camel.as_ref()),
        values::opt_text(item.yearly_price.as_ref()),
        values::opt_text(item.yearly_price_camel.as_ref()),
        values::flag_value(item.is_free.as_ref()),
        values::flag_value(item.is_free_camel.as_ref()),
        values::opt_text(item.price_description.as_ref()),
        values::opt_text(item.price_description_camel.as_ref()),
        values::flag_value(item.is_new.as_ref()),
        values::flag_value(item.is_new_camel.as_ref()),
    ];
    let placeholders = vec!["?"; bound.len()].join(", ");
    conn.execute(
        &format!("INSERT INTO unified_content ({CONTENT_COLUMNS}) VALUES ({placeholders})"),
        params_from_iter(bound.iter()),
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}
