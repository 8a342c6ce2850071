//! Yes/no confirmation dialog.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

use crate::controller::{ConfirmOutcome, ConfirmRequest};
use crate::state::notifications::Severity;

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✕",
    }
}

/// Outcome a key press settles the prompt to, if any.
pub fn key_outcome(key: &str) -> Option<ConfirmOutcome> {
    (key == "Escape").then_some(ConfirmOutcome::Cancelled)
}

/// Modal prompt that settles to confirmed or cancelled.
///
/// Clicking the backdrop or pressing Escape counts as cancel. The dialog
/// takes focus on mount so Escape reaches it.
#[component]
pub fn ConfirmDialog(request: ConfirmRequest, on_resolve: Callback<ConfirmOutcome>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(dialog) = dialog_ref.get() {
                if let Err(e) = dialog.focus() {
                    log::debug!("confirm dialog focus failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("confirm dialog mounted: {}", dialog_ref.get_untracked().is_some());
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(outcome) = key_outcome(&ev.key()) {
            ev.prevent_default();
            on_resolve.run(outcome);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_resolve.run(ConfirmOutcome::Cancelled)>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <span class="dialog__icon" aria-hidden="true">{severity_icon(request.severity)}</span>
                <h2>{request.title}</h2>
                <p class="dialog__danger">{request.text}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_resolve.run(ConfirmOutcome::Cancelled)>
                        {request.cancel_label}
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_resolve.run(ConfirmOutcome::Confirmed)>
                        {request.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
