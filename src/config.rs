//! Catalog configuration.
//!
//! The app has no environment or command line; these values are fixed at
//! build time and provided to components through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key shared with catalogs written by earlier builds.
pub const DEFAULT_STORAGE_KEY: &str = "PRODUCTOS";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "L";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Key of the product list in the host store.
    pub storage_key: String,
    /// Prefix used when rendering prices.
    pub currency_symbol: String,
    /// How long a toast stays up before dismissing itself.
    pub toast_timeout_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}
