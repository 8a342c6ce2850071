//! Browser `localStorage` backend. Requires a browser environment.

#[cfg(feature = "csr")]
use super::KeyValueStore;
#[cfg(feature = "csr")]
use crate::error::CatalogError;

/// Handle to the window's `localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    /// Acquire the window's storage area.
    pub fn open() -> Result<Self, CatalogError> {
        let window = web_sys::window().ok_or_else(|| CatalogError::Storage("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CatalogError::Storage(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| CatalogError::Storage("localStorage not available".to_owned()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CatalogError> {
        self.storage
            .get_item(key)
            .map_err(|e| CatalogError::Storage(format!("read {key}: {e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CatalogError::Storage(format!("write {key}: {e:?}")))
    }
}
