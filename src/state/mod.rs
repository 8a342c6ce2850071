//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split so the catalog view model and the notification queue can be
//! provided as separate contexts and updated independently.

pub mod catalog;
pub mod notifications;
