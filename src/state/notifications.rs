//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Notifications are plain data produced by the controller. The toast stack
//! component renders whatever is queued here and removes entries by sequence
//! number when they time out or are dismissed.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::state::catalog::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

/// A message for the user, optionally pointing at the form field at fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub field: Option<Field>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into(), field: None }
    }

    pub fn warning(message: impl Into<String>, field: Option<Field>) -> Self {
        Self { severity: Severity::Warning, message: message.into(), field }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into(), field: None }
    }
}

/// A queued notification with its dismissal handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub toasts: Vec<Toast>,
    next_seq: u64,
}

impl NotificationState {
    /// Queue a notification and return its sequence number.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.toasts.push(Toast { seq, notification });
        seq
    }

    pub fn dismiss(&mut self, seq: u64) {
        self.toasts.retain(|t| t.seq != seq);
    }
}
