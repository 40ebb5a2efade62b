//! Persistence tests for folio-storage
//!
//! A "reload" is simulated by dropping a store and opening a new one over
//! the same directory.

use std::sync::Arc;

use folio_storage::{FileSlotStore, InMemorySlotStore, PREFERENCES_FILE, SlotStore};
use tempfile::TempDir;

#[test]
fn test_value_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileSlotStore::open(dir.path()).unwrap();
        store.set("theme", "dark").unwrap();
    }

    let reopened = FileSlotStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_last_write_wins_across_reopens() {
    let dir = TempDir::new().unwrap();

    for value in ["dark", "light", "dark", "light"] {
        let store = FileSlotStore::open(dir.path()).unwrap();
        store.set("theme", value).unwrap();
    }

    let store = FileSlotStore::open(dir.path()).unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    assert!(!dir.path().join("preferences.json.tmp").exists());
}

#[test]
fn test_stores_are_usable_as_trait_objects() {
    let dir = TempDir::new().unwrap();
    let stores: Vec<Arc<dyn SlotStore>> = vec![
        Arc::new(InMemorySlotStore::new()),
        Arc::new(FileSlotStore::open(dir.path()).unwrap()),
    ];

    for store in stores {
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    assert!(dir.path().join(PREFERENCES_FILE).exists());
}

#[test]
fn test_concurrent_writers_keep_file_valid() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileSlotStore::open(dir.path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let value = if i % 2 == 0 { "dark" } else { "light" };
                store.set(&format!("slot-{i}"), value).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8 {
        assert!(store.get(&format!("slot-{i}")).unwrap().is_some());
    }
}
