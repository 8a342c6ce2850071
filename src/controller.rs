//! Product list controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between UI events and the product store. Every operation takes the
//! page view model by reference, mutates a copy of the product list, persists
//! the full copy, and only then commits it to the view model. The
//! presentation layer learns what to do next from the returned
//! `CatalogEvent`s (toasts, closing the modal, focusing a field).
//!
//! Deletion is a two-step request/response: `request_delete` yields the
//! prompt to show, and `resolve_delete` is the continuation run once the
//! prompt settles.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::error::CatalogError;
use crate::state::catalog::{CatalogState, Field, ModalMode, Product, ProductForm, ProductId};
use crate::state::notifications::{Notification, Severity};
use crate::store::{KeyValueStore, ProductStore};
use crate::util::clock::{ClockIdSource, IdSource};
use crate::util::currency::parse_price;

/// Instruction for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    Notify(Notification),
    CloseModal,
    FocusField(Field),
}

/// Everything the confirmation dialog needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub product_id: ProductId,
    pub title: String,
    /// Picks the dialog icon.
    pub severity: Severity,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// How the user settled a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Validated form input.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductFields {
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Check fields in order and report the first that is blank.
///
/// Price must additionally parse as a finite non-negative number.
pub fn validate(form: &ProductForm) -> Result<ProductFields, CatalogError> {
    if let Some(field) = Field::ALL.into_iter().find(|f| form.value(*f).trim().is_empty()) {
        return Err(CatalogError::Validation { field });
    }
    let price = parse_price(&form.price).ok_or_else(|| CatalogError::InvalidPrice { input: form.price.clone() })?;
    Ok(ProductFields {
        title: form.title.trim().to_owned(),
        description: form.description.trim().to_owned(),
        price,
    })
}

pub struct ProductController<S, I = ClockIdSource> {
    store: ProductStore<S>,
    ids: I,
}

impl<S: KeyValueStore> ProductController<S> {
    pub fn new(store: ProductStore<S>) -> Self {
        Self::with_ids(store, ClockIdSource::new())
    }
}

impl<S: KeyValueStore, I: IdSource> ProductController<S, I> {
    pub fn with_ids(store: ProductStore<S>, ids: I) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    /// Rebuild the in-memory list from the store.
    pub fn load(&mut self, state: &mut CatalogState) {
        let products = self.store.load();
        for product in &products {
            self.ids.observe(product.id);
        }
        log::info!("catalog loaded: {} products", products.len());
        state.products = products;
    }

    pub fn open_create(&self, state: &mut CatalogState) {
        state.form = ProductForm::default();
        state.modal = ModalMode::Create;
    }

    pub fn open_edit(&self, state: &mut CatalogState, product: &Product) {
        state.form = ProductForm::from_product(product);
        state.modal = ModalMode::Edit(product.id);
    }

    /// Dismiss the form modal without saving.
    pub fn close(&self, state: &mut CatalogState) -> Vec<CatalogEvent> {
        state.form = ProductForm::default();
        state.modal = ModalMode::Closed;
        vec![CatalogEvent::CloseModal]
    }

    /// Validate the form and create or update depending on the modal mode.
    ///
    /// On success the modal returns to `Closed`. On failure it stays open
    /// and the first offending field is focused.
    pub fn submit(&mut self, state: &mut CatalogState) -> Vec<CatalogEvent> {
        let mode = state.modal;
        let result = match mode {
            ModalMode::Closed => {
                log::warn!("submit ignored: form modal is closed");
                return Vec::new();
            }
            ModalMode::Create => validate(&state.form).and_then(|fields| self.create(state, fields)),
            ModalMode::Edit(id) => validate(&state.form).and_then(|fields| self.update(state, id, fields)),
        };

        match result {
            Ok(_) => {
                let message = if matches!(mode, ModalMode::Create) {
                    "Product saved"
                } else {
                    "Product updated"
                };
                state.form = ProductForm::default();
                state.modal = ModalMode::Closed;
                vec![CatalogEvent::Notify(Notification::success(message)), CatalogEvent::CloseModal]
            }
            Err(e) => failure_events(&e),
        }
    }

    /// Append a new product with a fresh id and persist the list.
    pub fn create(&mut self, state: &mut CatalogState, fields: ProductFields) -> Result<Product, CatalogError> {
        let id = loop {
            let id = self.ids.next_id().ok_or_else(|| CatalogError::Storage("id space exhausted".to_owned()))?;
            if state.find(id).is_none() {
                break id;
            }
        };
        let product = Product { id, title: fields.title, description: fields.description, price: fields.price };

        let mut next = state.products.clone();
        next.push(product.clone());
        self.commit(state, next)?;
        log::info!("product created: id={id}");
        Ok(product)
    }

    /// Replace the fields of product `id` in place and persist the list.
    pub fn update(
        &mut self,
        state: &mut CatalogState,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, CatalogError> {
        let mut next = state.products.clone();
        let slot = next.iter_mut().find(|p| p.id == id).ok_or(CatalogError::NotFound(id))?;
        slot.title = fields.title;
        slot.description = fields.description;
        slot.price = fields.price;
        let product = slot.clone();

        self.commit(state, next)?;
        log::info!("product updated: id={id}");
        Ok(product)
    }

    /// Build the confirmation prompt for deleting `id` and mark it pending.
    pub fn request_delete(&self, state: &mut CatalogState, id: ProductId) -> ConfirmRequest {
        state.pending_delete = Some(id);
        ConfirmRequest {
            product_id: id,
            title: "Delete this product?".to_owned(),
            severity: Severity::Warning,
            text: "This cannot be undone.".to_owned(),
            confirm_label: "Yes, delete".to_owned(),
            cancel_label: "Cancel".to_owned(),
        }
    }

    /// Continuation of `request_delete` once the prompt settles.
    pub fn resolve_delete(
        &mut self,
        state: &mut CatalogState,
        outcome: Result<ConfirmOutcome, CatalogError>,
    ) -> Vec<CatalogEvent> {
        let pending = state.pending_delete.take();
        let result = match (outcome, pending) {
            (Err(e), _) => Err(e),
            (Ok(_), None) => Err(CatalogError::ConfirmationFailed("no deletion is awaiting confirmation".to_owned())),
            (Ok(ConfirmOutcome::Cancelled), Some(id)) => {
                log::debug!("delete cancelled: id={id}");
                return Vec::new();
            }
            (Ok(ConfirmOutcome::Confirmed), Some(id)) => self.delete(state, id),
        };

        match result {
            Ok(()) => vec![CatalogEvent::Notify(Notification::success("Product deleted"))],
            Err(e) => failure_events(&e),
        }
    }

    /// Remove `id` from the list and persist. Unknown ids leave the list as is.
    pub fn delete(&mut self, state: &mut CatalogState, id: ProductId) -> Result<(), CatalogError> {
        let next: Vec<Product> = state.products.iter().filter(|p| p.id != id).cloned().collect();
        self.commit(state, next)?;
        log::info!("product deleted: id={id}");
        Ok(())
    }

    fn commit(&self, state: &mut CatalogState, next: Vec<Product>) -> Result<(), CatalogError> {
        self.store.save(&next)?;
        state.products = next;
        Ok(())
    }
}

fn failure_events(err: &CatalogError) -> Vec<CatalogEvent> {
    log::warn!("catalog operation failed: {err}");
    let mut events = vec![CatalogEvent::Notify(err.notification())];
    if let Some(field) = err.field() {
        events.push(CatalogEvent::FocusField(field));
    }
    events
}
