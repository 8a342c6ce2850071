//! Product list snapshot persisted under one key.
//!
//! DESIGN
//! ======
//! The whole list is one JSON array. Saves always overwrite the full
//! snapshot; there is no merge. Loading never fails visibly: a missing key,
//! unreadable host storage, or malformed JSON all yield an empty list.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use super::KeyValueStore;
use crate::error::CatalogError;
use crate::state::catalog::Product;

#[derive(Clone, Debug)]
pub struct ProductStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ProductStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the persisted list, degrading to empty on any problem.
    pub fn load(&self) -> Vec<Product> {
        match self.try_load() {
            Ok(products) => {
                log::debug!("loaded {} products from {}", products.len(), self.key);
                products
            }
            Err(e) => {
                log::warn!("stored catalog under {} is unreadable and will be replaced on next save: {e}", self.key);
                Vec::new()
            }
        }
    }

    /// Load the persisted list, reporting why it could not be read.
    pub fn try_load(&self) -> Result<Vec<Product>, CatalogError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str::<Vec<Product>>(&raw).map_err(|e| CatalogError::StorageCorrupt(e.to_string()))
    }

    /// Overwrite the persisted snapshot with `products`.
    pub fn save(&self, products: &[Product]) -> Result<(), CatalogError> {
        let raw = serde_json::to_string(products).map_err(|e| CatalogError::Storage(e.to_string()))?;
        self.backend.set_item(&self.key, &raw)?;
        log::debug!("saved {} products to {}", products.len(), self.key);
        Ok(())
    }
}
