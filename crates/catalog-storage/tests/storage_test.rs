//! Category/content queries, migrations, and file-backed behavior.

use std::io::Write;

use catalog_core::config::{RetryConfig, StorageConfig};
use catalog_core::errors::StorageError;
use catalog_core::models::{
    Category, Column, ContentItem, Flag, FlagValue, PageWindow, Predicate, RawTimestamp,
};
use catalog_core::traits::{ICategoryStore, IContentStore};
use catalog_storage::connection::pragmas::verify_wal_mode;
use catalog_storage::migrations::current_version;
use catalog_storage::queries::categories::insert_category;
use catalog_storage::queries::content::insert_content;
use catalog_storage::StorageEngine;
use tempfile::tempdir;

fn category(id: i64, name: &str, parent_id: Option<i64>, display_order: i64) -> Category {
    Category {
        id,
        name: name.to_string(),
        parent_id,
        is_active: true,
        display_order,
        is_for_products: true,
        is_for_services: false,
        is_for_ai_apps: false,
    }
}

fn item(id: i64, category: &str, created_at: RawTimestamp) -> ContentItem {
    ContentItem {
        id,
        title: Some(format!("item {id}")),
        category: Some(category.to_string()),
        created_at: Some(created_at),
        ..Default::default()
    }
}

fn seed_taxonomy(engine: &StorageEngine) {
    engine
        .with_writer(|conn| {
            insert_category(conn, &category(1, "Electronics & Gadgets", None, 1))?;
            insert_category(conn, &category(2, "Mobiles", Some(1), 2))?;
            insert_category(conn, &category(3, "Laptops", Some(1), 2))?;
            insert_category(conn, &category(4, "Cameras", Some(1), 1))?;
            let mut retired = category(5, "Pagers", Some(1), 0);
            retired.is_active = false;
            insert_category(conn, &retired)?;
            // Child sharing a top-level name under another parent.
            insert_category(conn, &category(6, "Fashion", None, 3))?;
            insert_category(conn, &category(7, "laptops", Some(6), 0))?;
            Ok(())
        })
        .unwrap();
}

#[test]
fn migrations_reach_latest_version() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let version = engine
        .with_writer(|conn| current_version(conn))
        .unwrap();
    assert_eq!(version, 2);
}

#[test]
fn find_category_is_case_insensitive_and_active_only() {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_taxonomy(&engine);

    let found = engine.find_category("electronics & GADGETS").unwrap().unwrap();
    assert_eq!(found.id, 1);
    assert!(found.is_top_level());
    assert!(engine.find_category("pagers").unwrap().is_none());
    assert!(engine.find_category("Unknown").unwrap().is_none());

    // Two children named "laptops": exact case wins, then lower display order.
    assert_eq!(engine.find_category("Laptops").unwrap().unwrap().id, 3);
    assert_eq!(engine.find_category("LAPTOPS").unwrap().unwrap().id, 7);
}

#[test]
fn top_level_category_wins_over_same_named_child() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .with_writer(|conn| {
            insert_category(conn, &category(1, "Home & Kitchen", None, 5))?;
            insert_category(conn, &category(2, "Lighting", Some(1), 0))?;
            insert_category(conn, &category(3, "lighting", None, 9))?;
            Ok(())
        })
        .unwrap();
    assert_eq!(engine.find_category("LIGHTING").unwrap().unwrap().id, 3);
}

#[test]
fn children_are_ordered_by_display_order_then_name() {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_taxonomy(&engine);

    let names: Vec<String> = engine
        .active_children(1)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Cameras", "Laptops", "Mobiles"]);
}

#[test]
fn top_level_listing_is_active_parents_in_display_order() {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_taxonomy(&engine);
    engine
        .with_writer(|conn| {
            let mut retired = category(8, "Typewriters", None, 0);
            retired.is_active = false;
            insert_category(conn, &retired)?;
            insert_category(conn, &category(9, "Books", None, 3))?;
            Ok(())
        })
        .unwrap();

    let names: Vec<String> = engine
        .top_level_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Electronics & Gadgets", "Books", "Fashion"]);
}

#[test]
fn in_memory_reads_share_the_writer() {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_taxonomy(&engine);
    assert_eq!(engine.read_pool_size(), 0);
    let count: i64 = engine
        .with_reader(|conn| {
            conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
                .map_err(catalog_storage::to_storage_err)
        })
        .unwrap();
    assert_eq!(count, 7);
}

#[test]
fn self_referencing_category_is_not_its_own_child() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .with_writer(|conn| {
            insert_category(conn, &category(1, "Loop", None, 0))?;
            conn.execute("UPDATE categories SET parent_id = id WHERE id = 1", [])
                .map_err(catalog_storage::to_storage_err)?;
            Ok(())
        })
        .unwrap();
    assert!(engine.active_children(1).unwrap().is_empty());
}

#[test]
fn legacy_flags_and_text_numbers_read_back() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let mut legacy = item(1, "Laptops", RawTimestamp::Text("2024-03-01 10:00:00".into()));
    legacy.featured = Some(FlagValue::Text("TRUE".into()));
    legacy.is_service = Some(FlagValue::Bool(true));
    legacy.rating = Some("4.5".into());
    legacy.review_count = Some(12);
    legacy.pricing_type_camel = Some("freemium".into());
    legacy.monthly_price = Some("₹199".into());
    legacy.is_free_camel = Some(FlagValue::Text("no".into()));
    legacy.is_new = Some(FlagValue::Bool(true));
    engine.with_writer(|conn| insert_content(conn, &legacy)).unwrap();

    let rows = engine
        .query_content(&Predicate::And(vec![]), PageWindow { limit: 10, offset: 0 })
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row.flag(Flag::Featured));
    assert!(row.flag(Flag::Service));
    assert_eq!(row.is_service, Some(FlagValue::Integer(1)));
    assert_eq!(row.rating.as_deref(), Some("4.5"));
    assert_eq!(row.review_count, Some(12));
    assert_eq!(row.pricing_type, None);
    assert_eq!(row.pricing_type_camel.as_deref(), Some("freemium"));
    assert_eq!(row.monthly_price.as_deref(), Some("₹199"));
    assert_eq!(row.is_free_camel, Some(FlagValue::Text("no".into())));
    assert_eq!(row.is_new, Some(FlagValue::Integer(1)));
    assert_eq!(
        row.created_at,
        Some(RawTimestamp::Text("2024-03-01 10:00:00".into()))
    );
}

#[test]
fn content_is_newest_first_across_timestamp_encodings() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .with_writer(|conn| {
            // 2023-11-14 in seconds, 2024-01-01 as text, 2024-06-01 in milliseconds.
            insert_content(conn, &item(1, "A", RawTimestamp::Integer(1_700_000_000)))?;
            insert_content(conn, &item(2, "A", RawTimestamp::Text("2024-01-01T00:00:00Z".into())))?;
            insert_content(conn, &item(3, "A", RawTimestamp::Integer(1_717_200_000_000)))?;
            // Same instant as row 1: id breaks the tie.
            insert_content(conn, &item(4, "A", RawTimestamp::Integer(1_700_000_000)))?;
            // Epoch seconds stored as text, 15 minutes after row 1.
            insert_content(conn, &item(5, "A", RawTimestamp::Text("1700000900".into())))?;
            // Two rows within the same second, in milliseconds.
            insert_content(conn, &item(6, "A", RawTimestamp::Integer(1_700_000_000_900)))?;
            insert_content(conn, &item(7, "A", RawTimestamp::Integer(1_700_000_000_100)))?;
            // Unreadable text sorts last.
            insert_content(conn, &item(8, "A", RawTimestamp::Text("someday".into())))?;
            Ok(())
        })
        .unwrap();

    let ids: Vec<i64> = engine
        .query_content(&Predicate::And(vec![]), PageWindow { limit: 10, offset: 0 })
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![3, 2, 5, 6, 7, 4, 1, 8]);
}

#[test]
fn windows_slice_the_ordered_result() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .with_writer(|conn| {
            for id in 1..=7 {
                insert_content(conn, &item(id, "A", RawTimestamp::Integer(1_700_000_000 + id)))?;
            }
            Ok(())
        })
        .unwrap();
    let all = Predicate::And(vec![]);
    let page = |offset| -> Vec<i64> {
        engine
            .query_content(&all, PageWindow { limit: 3, offset })
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect()
    };
    assert_eq!(page(0), vec![7, 6, 5]);
    assert_eq!(page(3), vec![4, 3, 2]);
    assert_eq!(page(6), vec![1]);
    assert!(page(9).is_empty());
}

#[test]
fn distinct_values_skip_blank_and_sort() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .with_writer(|conn| {
            for (id, sub) in [(1, Some("Mobiles")), (2, Some(" ")), (3, None), (4, Some("Cameras")), (5, Some("Mobiles"))] {
                let mut row = item(id, "Electronics & Gadgets", RawTimestamp::Integer(id));
                row.subcategory = sub.map(String::from);
                insert_content(conn, &row)?;
            }
            insert_content(conn, &ContentItem {
                id: 6,
                category: Some("Fashion".into()),
                subcategory: Some("Shoes".into()),
                ..Default::default()
            })?;
            Ok(())
        })
        .unwrap();

    let values = engine
        .distinct_values(
            Column::Subcategory,
            &Predicate::equals(Column::Category, "electronics & gadgets"),
        )
        .unwrap();
    assert_eq!(values, vec!["Cameras", "Mobiles"]);
}

#[test]
fn file_backed_store_survives_reopen_and_uses_read_pool() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite");
    let config = StorageConfig {
        read_pool_size: 2,
        ..Default::default()
    };

    {
        let engine = StorageEngine::open(&path, &config, RetryConfig::immediate(3)).unwrap();
        seed_taxonomy(&engine);
        engine
            .with_writer(|conn| insert_content(conn, &item(1, "Laptops", RawTimestamp::Integer(1))))
            .unwrap();
        assert!(engine.with_writer(|conn| verify_wal_mode(conn)).unwrap());
    }

    let engine = StorageEngine::open(&path, &config, RetryConfig::immediate(3)).unwrap();
    assert_eq!(engine.read_pool_size(), 2);
    assert_eq!(engine.find_category("ELECTRONICS & GADGETS").unwrap().unwrap().id, 1);
    assert_eq!(
        engine
            .count_content(&Predicate::equals(Column::Category, "laptops"))
            .unwrap(),
        1
    );

    // Pooled readers are query-only.
    let write_attempt = engine.with_reader(|conn| {
        conn.execute("DELETE FROM unified_content", [])
            .map_err(catalog_storage::to_storage_err)
    });
    assert!(write_attempt.is_err());
}

#[test]
fn garbage_file_is_reported_as_corruption() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not-a-db.sqlite");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&[b'x'; 4096]).unwrap();
    drop(file);

    let err = StorageEngine::open(&path, &StorageConfig::default(), RetryConfig::immediate(1))
        .err()
        .unwrap();
    assert!(matches!(err, StorageError::Corruption { .. }), "{err:?}");
}
