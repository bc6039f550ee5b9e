use super::snapshot::FormSnapshot;

/// The single localStorage slot holding the most recent snapshot.
const STORAGE_KEY: &str = "last_costing_selection";

/// Raw access to the one persisted slot. Injected into `FormStateStore` so
/// tests can substitute an in-memory backend for localStorage.
pub trait SnapshotBackend {
    fn read(&self) -> Option<String>;
    fn write(&self, raw: &str);
    fn delete(&self);
}

/// A shared reference to a backend is itself a backend, so a store can
/// borrow one the caller keeps inspecting.
impl<B: SnapshotBackend> SnapshotBackend for &B {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, raw: &str) {
        (**self).write(raw)
    }

    fn delete(&self) {
        (**self).delete()
    }
}

/// Production backend: `window.localStorage` under the fixed key.
/// Every operation degrades to a no-op when storage is unavailable.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SnapshotBackend for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, raw: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, raw);
        }
    }

    fn delete(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Persists and restores form snapshots through the single shared slot.
#[derive(Clone, Copy, Default)]
pub struct FormStateStore<B: SnapshotBackend> {
    backend: B,
}

impl<B: SnapshotBackend> FormStateStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads the persisted snapshot. An empty slot and a corrupt slot look
    /// the same to callers: no saved state.
    pub fn restore(&self) -> Option<FormSnapshot> {
        let raw = self.backend.read()?;
        serde_json::from_str(&raw).ok()
    }

    /// Overwrites the slot unconditionally, last write wins.
    pub fn persist(&self, snapshot: &FormSnapshot) {
        let Ok(raw) = serde_json::to_string(snapshot) else {
            return;
        };
        self.backend.write(&raw);
    }

    pub fn clear(&self) {
        self.backend.delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::costing::{FIELD_QUANTITY, FIELD_SUPPLIER};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryBackend {
        slot: RefCell<Option<String>>,
    }

    impl SnapshotBackend for MemoryBackend {
        fn read(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn write(&self, raw: &str) {
            *self.slot.borrow_mut() = Some(raw.to_string());
        }

        fn delete(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    #[test]
    fn persist_then_restore_round_trips() {
        let backend = MemoryBackend::default();
        let store = FormStateStore::new(&backend);

        let snapshot = FormSnapshot::form_defaults()
            .with_field(FIELD_QUANTITY, "5".to_string())
            .with_field(FIELD_SUPPLIER, "SanFang".to_string());
        store.persist(&snapshot);

        assert_eq!(store.restore(), Some(snapshot));
    }

    #[test]
    fn restore_is_idempotent() {
        let backend = MemoryBackend::default();
        let store = FormStateStore::new(&backend);

        let snapshot = FormSnapshot::form_defaults();
        store.persist(&snapshot);

        let first = store.restore();
        let second = store.restore();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_slot_reads_as_no_saved_state() {
        let backend = MemoryBackend::default();
        backend.write("{not json");

        let store = FormStateStore::new(&backend);
        assert_eq!(store.restore(), None);

        // The form stays at its defaults when restore finds nothing.
        let seeded = match store.restore() {
            Some(saved) => FormSnapshot::form_defaults().merged_with_saved(&saved),
            None => FormSnapshot::form_defaults(),
        };
        assert_eq!(seeded, FormSnapshot::form_defaults());
    }

    #[test]
    fn persist_overwrites_the_single_slot() {
        let backend = MemoryBackend::default();
        let store = FormStateStore::new(&backend);

        store.persist(&FormSnapshot::form_defaults().with_field(FIELD_QUANTITY, "2".to_string()));
        store.persist(&FormSnapshot::form_defaults().with_field(FIELD_QUANTITY, "9".to_string()));

        let restored = store.restore().unwrap();
        assert_eq!(restored.get(FIELD_QUANTITY), Some("9"));
    }

    #[test]
    fn store_borrowing_the_backend_shares_its_slot() {
        let backend = MemoryBackend::default();
        let store = FormStateStore::new(&backend);

        // Written directly on the backend, visible through the store.
        backend.write(r#"{"quantity":"3"}"#);
        assert_eq!(store.restore().unwrap().get(FIELD_QUANTITY), Some("3"));

        // And the other way around.
        store.persist(&FormSnapshot::form_defaults());
        assert!(backend.read().unwrap().contains("process"));
    }

    #[test]
    fn clear_empties_the_slot() {
        let backend = MemoryBackend::default();
        let store = FormStateStore::new(&backend);

        store.persist(&FormSnapshot::form_defaults());
        assert!(backend.read().is_some());

        store.clear();
        assert!(backend.read().is_none());
        assert_eq!(store.restore(), None);
    }
}
