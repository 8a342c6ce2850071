//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome and receive state and callbacks from the
//! products page rather than reaching into the controller themselves.

pub mod confirm_dialog;
pub mod product_form_modal;
pub mod product_table;
pub mod toast_stack;
