use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "tok-1").unwrap();
    assert_eq!(storage.get("token").as_deref(), Some("tok-1"));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(other.get("k").as_deref(), Some("v"));
    other.remove("k");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("nothing");
    storage.remove("nothing");
    assert_eq!(storage.len(), 0);
}

#[test]
fn memory_storage_rejected_key_fails_write() {
    let storage = MemoryStorage::new();
    storage.reject_writes_to("user");
    let err = storage.set("user", "{}").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "user"));
    assert!(storage.get("user").is_none());
    assert!(storage.set("token", "t").is_ok());
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.set("k", "v"), Err(StorageError::Unavailable));
    assert!(storage.get("k").is_none());
    storage.remove("k");
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_then_load_json() {
    let storage = MemoryStorage::new();
    save_json(&storage, "lang", &"fr").unwrap();
    assert_eq!(load_json::<_, String>(&storage, "lang").as_deref(), Some("fr"));
}

#[test]
fn load_json_malformed_is_none() {
    let storage = MemoryStorage::new();
    storage.set("lang", "{not json").unwrap();
    assert!(load_json::<_, String>(&storage, "lang").is_none());
}
