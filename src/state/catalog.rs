//! Catalog view model: the product list plus transient form state.
//!
//! DESIGN
//! ======
//! The list is a disposable mirror of the persisted snapshot. Form fields are
//! kept as raw text exactly as typed; parsing happens only on submit.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Product identifier, derived from a millisecond clock at creation.
pub type ProductId = i64;

/// A catalog entry as persisted in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Form input fields, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Price];

    /// Human label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Product title",
            Self::Description => "Product description",
            Self::Price => "Product price",
        }
    }

    /// DOM id of the input rendering this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Name",
            Self::Description => "Description",
            Self::Price => "Price",
        }
    }
}

/// Which operation the reusable form modal is performing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Create,
    /// Editing the product with this id.
    Edit(ProductId),
}

impl ModalMode {
    /// Heading shown at the top of the form modal.
    pub fn title(self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Create => "Register Product",
            Self::Edit(_) => "Edit Product",
        }
    }
}

/// Raw form contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductForm {
    /// Prefill the form from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Price => self.price = value,
        }
    }
}

/// Page-level view model shared through context.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub form: ProductForm,
    pub modal: ModalMode,
    pub pending_delete: Option<ProductId>,
}

impl CatalogState {
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn modal_title(&self) -> &'static str {
        self.modal.title()
    }
}
