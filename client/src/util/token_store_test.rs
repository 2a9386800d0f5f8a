use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryTokenStore::default();
    store.set("abc123");
    assert_eq!(store.get().as_deref(), Some("abc123"));
    store.set("def456");
    assert_eq!(store.get().as_deref(), Some("def456"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("abc123");
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryTokenStore::default();
    let view = store.clone();
    store.set("shared");
    assert_eq!(view.get().as_deref(), Some("shared"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_inert_off_browser() {
    let store = LocalTokenStore::new("auth_token");
    store.set("abc123");
    assert_eq!(store.get(), None);
    store.clear();
}
