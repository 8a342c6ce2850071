//! Catalog error taxonomy.
//!
//! DESIGN
//! ======
//! Every failure is handled where it happens and surfaced as a notification,
//! so errors carry enough context to build a user-facing message and, for
//! input problems, the form field to highlight.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::catalog::{Field, ProductId};
use crate::state::notifications::Notification;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("{} is blank", .field.label())]
    Validation { field: Field },
    #[error("price is not a valid amount: {input:?}")]
    InvalidPrice { input: String },
    #[error("product not found: {0}")]
    NotFound(ProductId),
    #[error("stored catalog is unreadable: {0}")]
    StorageCorrupt(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("confirmation failed: {0}")]
    ConfirmationFailed(String),
}

impl CatalogError {
    /// Form field this error points at, if it came from form input.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Validation { field } => Some(*field),
            Self::InvalidPrice { .. } => Some(Field::Price),
            _ => None,
        }
    }

    /// User-facing notification for this error.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Validation { field } => Notification::warning(format!("{} is blank", field.label()), Some(*field)),
            Self::InvalidPrice { .. } => {
                Notification::warning("Product price must be a non-negative number", Some(Field::Price))
            }
            Self::NotFound(_) => Notification::error("The product no longer exists"),
            Self::StorageCorrupt(_) | Self::Storage(_) => Notification::error("Could not save the catalog"),
            Self::ConfirmationFailed(msg) => Notification::error(msg.clone()),
        }
    }
}
