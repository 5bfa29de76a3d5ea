//! End-to-end: table store → classifier → derived table.

use std::sync::Arc;

use chrono::NaiveDate;

use abcrank_core::{AccountId, CanonicalSku, FixedClock, OrderRecord, ProductRecord, Tier};
use abcrank_tables::{MemoryTableStore, TableStore};

use crate::AbcClassifier;

fn fixture_store() -> MemoryTableStore {
    let products = vec![
        ProductRecord {
            offer_id: "OF-1".into(),
            canonical_sku: "S1".into(),
            account_id: AccountId::new(10),
            created_at: "2025-06-01".to_string(),
            family: "Shoes".to_string(),
            title: "Runner".to_string(),
            reviews_count: 4,
            rating_value: 4.7,
        },
        ProductRecord {
            offer_id: "OF-2".into(),
            canonical_sku: "S2".into(),
            account_id: AccountId::new(10),
            created_at: "2025-06-01".to_string(),
            family: "Shoes".to_string(),
            title: "Walker".to_string(),
            reviews_count: 1,
            rating_value: 3.9,
        },
        // Old, unreviewed, never traded: the dead-stock row.
        ProductRecord {
            offer_id: "OF-3".into(),
            canonical_sku: "S3".into(),
            account_id: AccountId::new(10),
            created_at: "2024-09-01".to_string(),
            family: "Hats".to_string(),
            title: "Beanie".to_string(),
            reviews_count: 0,
            rating_value: 0.0,
        },
    ];
    let orders = vec![
        OrderRecord {
            offer_id: "OF-1".into(),
            account_id: AccountId::new(10),
            created_at: "2025-07-01".to_string(),
            status: "Доставлен".to_string(),
            revenue: 800.0,
        },
        OrderRecord {
            offer_id: "OF-2".into(),
            account_id: AccountId::new(10),
            created_at: "2025-07-02".to_string(),
            status: "Доставлен".to_string(),
            revenue: 200.0,
        },
    ];
    MemoryTableStore::new()
        .with_products(products)
        .with_orders(orders)
}

fn classifier() -> AbcClassifier {
    let date = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    AbcClassifier::new(Arc::new(FixedClock(date)))
}

#[test]
fn classify_from_store_and_persist_derived_table() {
    let store = fixture_store();
    let products = store.load_products().unwrap();
    let orders = store.load_orders().unwrap();

    let rows = classifier().classify(&products, &orders, None).unwrap();
    assert_eq!(rows.len(), 3);

    store.save_classification(&rows).unwrap();
    let persisted = store.classification();
    assert_eq!(persisted, rows);

    let tier_of = |sku: &str| {
        persisted
            .iter()
            .find(|r| r.canonical_sku == CanonicalSku::from(sku))
            .unwrap()
            .tier
    };
    assert_eq!(tier_of("S1"), Tier::A);
    assert_eq!(tier_of("S2"), Tier::C); // cumshare 1.0
    assert_eq!(tier_of("S3"), Tier::C); // stale override
}

#[test]
fn account_scoped_run_over_the_same_store() {
    let store = fixture_store();
    let products = store.load_products().unwrap();
    let orders = store.load_orders().unwrap();

    let rows = classifier()
        .classify(&products, &orders, Some(AccountId::new(42)))
        .unwrap();
    assert!(rows.is_empty());

    // The unscoped tables are untouched by the scoped run.
    assert_eq!(store.load_products().unwrap().len(), 3);
}
