use abone_core::{CoreError, SubscriptionStore};
use abone_domain::{BillingCycle, Currency, Subscription};
use abone_storage_json::JsonSubscriptionStore;
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

fn record(name: &str) -> Subscription {
    Subscription::new(
        name,
        100.0,
        Currency::Local,
        BillingCycle::Monthly,
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        "Entertainment",
    )
}

#[test]
fn json_store_round_trips_records() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    let netflix = record("Netflix").with_duration(6);
    let rent = record("Home rent").with_image("rent");
    store.insert(&netflix).expect("insert netflix");
    store.insert(&rent).expect("insert rent");

    let rows = store.select_all().expect("select all");
    assert_eq!(rows.len(), 2);
    let loaded = rows.iter().find(|row| row.id == netflix.id).expect("row");
    assert_eq!(loaded.name, "Netflix");
    assert_eq!(loaded.duration, Some(6));
    assert_eq!(loaded.start_date, netflix.start_date);
    assert!(store.table_path().exists());
}

#[test]
fn json_store_rejects_duplicate_ids() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    let sub = record("Netflix");
    store.insert(&sub).expect("first insert");
    let err = store.insert(&sub).expect_err("duplicate insert");
    assert!(matches!(err, CoreError::DuplicateSubscription(id) if id == sub.id));
}

#[test]
fn json_store_updates_existing_rows_only() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    let mut sub = record("Netflix");
    store.insert(&sub).expect("insert");
    sub.price = 130.0;
    store.update(&sub).expect("update");
    let rows = store.select_all().expect("select all");
    assert_eq!(rows[0].price, 130.0);

    let unknown = record("Ghost");
    let err = store.update(&unknown).expect_err("unknown id");
    assert!(matches!(err, CoreError::SubscriptionNotFound(id) if id == unknown.id));
}

#[test]
fn json_store_delete_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    let sub = record("Netflix");
    store.insert(&sub).expect("insert");
    store.delete_by_id(&sub.id).expect("delete");
    store.delete_by_id(&sub.id).expect("second delete is a no-op");
    assert!(store.select_all().expect("select all").is_empty());
}

#[test]
fn json_store_missing_file_reads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");
    assert!(store.select_all().expect("select all").is_empty());
}

#[test]
fn json_store_clear_removes_the_table() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    store.insert(&record("Netflix")).expect("insert");
    store.clear().expect("clear");
    assert!(!store.table_path().exists());
    assert!(store.select_all().expect("select all").is_empty());
    store.clear().expect("clearing an empty store is fine");
}

#[test]
fn json_store_surfaces_corrupt_tables_as_serde_errors() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    fs::write(store.table_path(), "{not valid json").expect("write garbage");
    let err = store.select_all().expect_err("corrupt table");
    assert!(matches!(err, CoreError::Serde(_)));
}

#[test]
fn json_store_keeps_original_column_names() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSubscriptionStore::new(dir.path().to_path_buf()).expect("create store");

    store.insert(&record("Netflix")).expect("insert");
    let raw = fs::read_to_string(store.table_path()).expect("read table");
    assert!(raw.contains("\"billingCycle\""));
    assert!(raw.contains("\"startDate\""));
    assert!(raw.contains("\"TL\""));
}
