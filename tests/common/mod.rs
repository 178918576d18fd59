#![allow(dead_code)]

use std::sync::Mutex;

use household_core::domain::Member;
use household_core::storage::{JsonHouseholdStorage, MemoryStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a snapshot storage backed by a unique directory for each test.
pub fn setup_storage() -> JsonHouseholdStorage {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonHouseholdStorage::new(temp.path().join("household.json"))
        .expect("create json storage backend");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    storage
}

/// A store pre-seeded with the usual three-member household.
pub fn family_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_member(Member::new("mom", "Mom").with_role("Mom"));
    store.add_member(Member::new("dad", "Dad").with_role("Dad"));
    store.add_member(Member::new("sofia", "Sofía").with_role("Child"));
    store
}
