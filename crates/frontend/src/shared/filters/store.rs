//! Durable storage for global filter selections.
//!
//! Selections are written through to localStorage under a dedicated key
//! namespace so they survive page reloads. Persistence is best-effort: the
//! in-memory selection is authoritative and storage failures are only logged.

use std::fmt;

use web_sys::window;

/// Prefix for all globally scoped filter keys. Unrelated preferences
/// (theme, font size) use their own keys and never collide with these.
const GLOBAL_FILTER_KEY_PREFIX: &str = "global_selected_";

/// Full localStorage key for a dimension, e.g. `global_selected_branch`.
pub fn storage_key(dimension: &str) -> String {
    format!("{}{}", GLOBAL_FILTER_KEY_PREFIX, dimension)
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// localStorage is not reachable (no window, storage disabled).
    Unavailable,
    /// The storage backend rejected the operation.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "localStorage is not available"),
            StoreError::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

/// Durable, string-keyed store for one integer selection per dimension.
///
/// Values are serialized as decimal strings. Writes are keyed per dimension;
/// concurrent writes to the same key are last-write-wins.
pub trait SelectionStore {
    /// Read the persisted selection for a dimension. Any read failure or an
    /// unparseable value is treated as "no persisted value".
    fn read(&self, dimension: &str) -> Option<i64>;

    /// Persist a selection for a dimension.
    fn write(&self, dimension: &str, id: i64) -> Result<(), StoreError>;

    /// Drop the persisted selection for a dimension.
    fn remove(&self, dimension: &str) -> Result<(), StoreError>;
}

/// `SelectionStore` over the browser's localStorage.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SelectionStore for LocalStorageStore {
    fn read(&self, dimension: &str) -> Option<i64> {
        let storage = local_storage()?;
        let raw = match storage.get_item(&storage_key(dimension)) {
            Ok(value) => value?,
            Err(err) => {
                log::warn!("filter '{}': reading stored selection failed: {:?}", dimension, err);
                return None;
            }
        };
        match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("filter '{}': stored selection '{}' is not an id", dimension, raw);
                None
            }
        }
    }

    fn write(&self, dimension: &str, id: i64) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&storage_key(dimension), &id.to_string())
            .map_err(|err| StoreError::Backend(format!("{:?}", err)))
    }

    fn remove(&self, dimension: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(&storage_key(dimension))
            .map_err(|err| StoreError::Backend(format!("{:?}", err)))
    }
}

/// In-memory store for coordinator tests: same key mapping and value
/// encoding as localStorage, plus failure injection and a write counter.
/// Clones share the same map, so a test can keep a handle next to the
/// coordinator's copy.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: std::rc::Rc<MemoryStoreInner>,
}

#[cfg(test)]
#[derive(Default)]
struct MemoryStoreInner {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    fail_writes: std::cell::Cell<bool>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(dimension: &str, id: i64) -> Self {
        let store = Self::new();
        store
            .inner
            .items
            .borrow_mut()
            .insert(storage_key(dimension), id.to_string());
        store
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self) {
        self.inner.fail_writes.set(true);
    }

    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }

    /// Raw stored string under the full localStorage key.
    pub fn raw(&self, full_key: &str) -> Option<String> {
        self.inner.items.borrow().get(full_key).cloned()
    }

    pub fn insert_raw(&self, full_key: &str, raw: &str) {
        self.inner
            .items
            .borrow_mut()
            .insert(full_key.to_string(), raw.to_string());
    }
}

#[cfg(test)]
impl SelectionStore for MemoryStore {
    fn read(&self, dimension: &str) -> Option<i64> {
        self.inner
            .items
            .borrow()
            .get(&storage_key(dimension))
            .and_then(|raw| raw.parse().ok())
    }

    fn write(&self, dimension: &str, id: i64) -> Result<(), StoreError> {
        if self.inner.fail_writes.get() {
            return Err(StoreError::Backend("injected write failure".into()));
        }
        self.inner
            .items
            .borrow_mut()
            .insert(storage_key(dimension), id.to_string());
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, dimension: &str) -> Result<(), StoreError> {
        self.inner.items.borrow_mut().remove(&storage_key(dimension));
        Ok(())
    }
}
