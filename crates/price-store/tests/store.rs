//! Behavioural tests for the SQLite product store.

use price_model::{NewProduct, ProductRecord};
use price_store::{DedupMode, InsertOutcome, ProductStore, SqliteStore};
use proptest::prelude::*;

fn store_with(products: &[(&str, f64, f64, &str)]) -> SqliteStore {
    let mut store = SqliteStore::in_memory().expect("open store");
    for (name, price, weight, file) in products {
        store
            .insert(NewProduct::new(*name, *price, *weight, *file))
            .expect("insert");
    }
    store
}

fn names(records: &[ProductRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn bread_round_trip() {
    let store = store_with(&[("Bread", 50.0, 0.5, "a.csv")]);

    let found = store.search("bread").expect("search");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Bread");
    assert_eq!(found[0].source_file, "a.csv");
    assert_eq!(
        price_model::format_unit_price(found[0].unit_price()),
        "100.00"
    );
}

#[test]
fn search_ignores_case() {
    let store = store_with(&[
        ("Milk", 80.0, 1.0, "a.csv"),
        ("Молоко", 90.0, 1.0, "b.csv"),
        ("Bread", 50.0, 0.5, "a.csv"),
    ]);

    for query in ["milk", "MILK", "il", "Milk"] {
        assert_eq!(names(&store.search(query).unwrap()), vec!["Milk"], "{query}");
    }
    for query in ["молоко", "МОЛОКО", "ЛОК"] {
        assert_eq!(names(&store.search(query).unwrap()), vec!["Молоко"], "{query}");
    }
    assert!(store.search("cheese").unwrap().is_empty());
}

#[test]
fn search_is_literal() {
    let store = store_with(&[
        ("Milk 100%", 80.0, 1.0, "a.csv"),
        ("Milk", 70.0, 1.0, "a.csv"),
        ("Bread_white", 50.0, 0.5, "a.csv"),
    ]);

    assert_eq!(names(&store.search("%").unwrap()), vec!["Milk 100%"]);
    assert_eq!(names(&store.search("_").unwrap()), vec!["Bread_white"]);
}

#[test]
fn empty_query_matches_all_ordered() {
    let store = store_with(&[
        ("Cheese", 600.0, 0.3, "b.csv"),
        ("Bread", 50.0, 0.5, "a.csv"),
        ("Milk", 80.0, 1.0, "a.csv"),
    ]);

    let everything = store.search("").unwrap();
    let ordered = store.all_ordered().unwrap();

    assert_eq!(everything, ordered);
    assert_eq!(names(&ordered), vec!["Milk", "Bread", "Cheese"]);
}

#[test]
fn equal_unit_prices_keep_insert_order() {
    let store = store_with(&[
        ("B", 100.0, 1.0, "a.csv"),
        ("A", 50.0, 0.5, "a.csv"),
        ("C", 100.0, 1.0, "b.csv"),
    ]);

    assert_eq!(names(&store.all_ordered().unwrap()), vec!["B", "A", "C"]);
}

#[test]
fn zero_weight_sorts_last_without_dividing() {
    let store = store_with(&[
        ("Weightless", 1.0, 0.0, "a.csv"),
        ("Cheese", 600.0, 0.3, "a.csv"),
        ("Bread", 50.0, 0.5, "a.csv"),
    ]);

    let ordered = store.all_ordered().unwrap();

    assert_eq!(names(&ordered), vec!["Bread", "Cheese", "Weightless"]);
    assert_eq!(ordered[2].unit_price(), None);
}

#[test]
fn duplicates_are_kept_by_default() {
    let store = store_with(&[("Bread", 50.0, 0.5, "a.csv"), ("Bread", 50.0, 0.5, "a.csv")]);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn fingerprint_mode_skips_repeats() {
    let mut store = SqliteStore::in_memory()
        .unwrap()
        .with_dedup(DedupMode::Fingerprint)
        .unwrap();
    let bread = NewProduct::new("Bread", 50.0, 0.5, "a.csv");

    let first = store.insert(bread.clone()).unwrap();
    let second = store.insert(bread).unwrap();
    let other_file = store
        .insert(NewProduct::new("Bread", 50.0, 0.5, "b.csv"))
        .unwrap();

    assert!(matches!(first, InsertOutcome::Inserted { .. }));
    assert_eq!(
        second,
        InsertOutcome::Duplicate {
            existing_id: first.id()
        }
    );
    assert!(matches!(other_file, InsertOutcome::Inserted { .. }));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn file_store_keeps_records_and_ids_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("prices.db");

    let first_id = {
        let mut store = SqliteStore::open(&path).unwrap();
        store
            .insert(NewProduct::new("Bread", 50.0, 0.5, "a.csv"))
            .unwrap()
            .id()
    };

    let mut store = SqliteStore::open(&path).unwrap();
    let second_id = store
        .insert(NewProduct::new("Milk", 80.0, 1.0, "a.csv"))
        .unwrap()
        .id();

    assert!(second_id > first_id);
    assert_eq!(store.count().unwrap(), 2);
}

proptest! {
    #[test]
    fn results_are_ordered_by_unit_price(
        products in prop::collection::vec(
            ("[a-cA-C]{1,6}", 0.0f64..10_000.0, 0.001f64..100.0),
            0..30,
        ),
        query in "[a-cA-C]{0,2}",
    ) {
        let mut store = SqliteStore::in_memory().unwrap();
        for (name, price, weight) in &products {
            store.insert(NewProduct::new(name.as_str(), *price, *weight, "p.csv")).unwrap();
        }

        let found = store.search(&query).unwrap();
        for pair in found.windows(2) {
            let (a, b) = (pair[0].unit_price().unwrap(), pair[1].unit_price().unwrap());
            prop_assert!(a <= b);
        }

        let needle = query.to_lowercase();
        let expected = products
            .iter()
            .filter(|(name, _, _)| name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(found.len(), expected);
    }
}
