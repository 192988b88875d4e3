use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("storage rejected write to {key}: {reason}")]
    Rejected { key: String, reason: String },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage the content store mirrors itself into.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, or nothing when running outside a browser.
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        #[cfg(not(target_arch = "wasm32"))]
        let inner = None;

        if inner.is_none() {
            log::warn!("localStorage unavailable, content changes will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.inner {
            Some(storage) => storage.get_item(key).map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Rejected {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::{KeyValueStorage, StorageError};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Shared in-memory storage; clones see the same items.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<BTreeMap<String, String>>>,
        writes: Rc<Cell<usize>>,
        read_only: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        pub fn writes(&self) -> usize {
            self.writes.get()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }

        pub fn set_read_only(&self, read_only: bool) {
            self.read_only.set(read_only);
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.raw(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only.get() {
                return Err(StorageError::Rejected {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.writes.set(self.writes.get() + 1);
            self.put_raw(key, value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_storage_outside_browser_reads_nothing_and_refuses_writes() {
        let storage = BrowserStorage::open();
        assert!(matches!(storage.get_item("footerData"), Ok(None)));
        assert!(matches!(
            storage.set_item("footerData", "{}"),
            Err(StorageError::Unavailable)
        ));
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let a = MemoryStorage::default();
        let b = a.clone();
        a.set_item("services", "[]").unwrap();
        assert_eq!(b.get_item("services").unwrap().as_deref(), Some("[]"));
        assert_eq!(b.writes(), 1);
    }
}
