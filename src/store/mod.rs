//! Persistent storage for the product catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host provides a synchronous string-keyed store (`localStorage` in the
//! browser). `KeyValueStore` is the seam over it so the catalog logic runs
//! unchanged against an in-memory map in native builds and tests.

pub mod local;
pub mod memory;
pub mod products;

pub use memory::MemoryStore;
pub use products::ProductStore;

use crate::error::CatalogError;

/// Synchronous string-keyed persistent storage.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if the key does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, CatalogError>;

    /// Insert or replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CatalogError>;
}

/// Storage backend picked at startup.
///
/// The browser build prefers `localStorage` and falls back to memory when the
/// host refuses access (private mode, disabled storage).
#[derive(Clone, Debug)]
pub enum HostStore {
    #[cfg(feature = "csr")]
    Local(local::BrowserStorage),
    Memory(MemoryStore),
}

impl HostStore {
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            match local::BrowserStorage::open() {
                Ok(storage) => return Self::Local(storage),
                Err(e) => log::warn!("localStorage unavailable, catalog will not persist: {e}"),
            }
        }
        Self::Memory(MemoryStore::new())
    }
}

impl KeyValueStore for HostStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CatalogError> {
        match self {
            #[cfg(feature = "csr")]
            Self::Local(s) => s.get_item(key),
            Self::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        match self {
            #[cfg(feature = "csr")]
            Self::Local(s) => s.set_item(key, value),
            Self::Memory(s) => s.set_item(key, value),
        }
    }
}
