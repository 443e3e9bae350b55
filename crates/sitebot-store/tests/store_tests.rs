//! Tests for sitebot-store: seeding, whole-file persistence, upsert writes

use sitebot_core::document::CAT_PRICES;
use sitebot_core::ContentDocument;
use sitebot_store::ContentStore;
use tempfile::tempdir;

fn store_in(dir: &tempfile::TempDir) -> ContentStore {
    ContentStore::new(dir.path().join("content-data.json"))
}

#[test]
fn load_without_file_returns_seeded_defaults() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    let doc = store.load().unwrap();
    assert_eq!(doc.get(CAT_PRICES, "price-1"), Some("\u{20b9}2,499"));
    // Nothing was written by a read
    assert!(!store.path().exists());
}

#[test]
fn ensure_exists_creates_seeded_file_once() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store.ensure_exists().unwrap();
    assert!(store.path().exists());
    let first = std::fs::read_to_string(store.path()).unwrap();

    store.ensure_exists().unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn set_field_is_a_minimal_diff_write() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    store.ensure_exists().unwrap();

    let before = store.load().unwrap();
    let after = store
        .set_field(CAT_PRICES, "price-1", "\u{20b9}1,999")
        .unwrap();

    assert_eq!(after.get(CAT_PRICES, "price-1"), Some("\u{20b9}1,999"));
    // Every other field is untouched
    for (category, fields) in before.categories() {
        for (id, value) in fields {
            if category == CAT_PRICES && id == "price-1" {
                continue;
            }
            assert_eq!(after.get(category, id), Some(value.as_str()));
        }
    }

    // And the change is durable
    assert_eq!(
        store.load().unwrap().get(CAT_PRICES, "price-1"),
        Some("\u{20b9}1,999")
    );
}

#[test]
fn set_field_creates_unknown_category_and_id() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    let doc = store.set_field("banners", "banner-1", "hello").unwrap();
    assert_eq!(doc.get("banners", "banner-1"), Some("hello"));
    assert_eq!(store.load().unwrap().get("banners", "banner-1"), Some("hello"));
}

#[test]
fn save_load_round_trip_is_byte_identical() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store.save(&ContentDocument::seeded()).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();

    let reloaded = store.load().unwrap();
    store.save(&reloaded).unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn saved_file_preserves_non_ascii() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store.save(&ContentDocument::seeded()).unwrap();
    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("\u{20b9}2,499"));
    assert!(!content.contains("\\u20b9"));
}

#[test]
fn load_rejects_corrupt_json() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    std::fs::write(store.path(), "{ not json").unwrap();
    assert!(store.load().is_err());
}
