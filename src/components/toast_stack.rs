//! Stacked toast notifications.
//!
//! Each toast removes itself after the configured timeout in the browser
//! build, and can be dismissed by clicking it.

use leptos::prelude::*;

use crate::state::notifications::{NotificationState, Toast};

#[component]
pub fn ToastStack(notifications: RwSignal<NotificationState>, timeout_ms: u32) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notifications.with(|s| s.toasts.clone())
                key=|toast| toast.seq
                let:toast
            >
                <ToastItem toast=toast notifications=notifications timeout_ms=timeout_ms/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, notifications: RwSignal<NotificationState>, timeout_ms: u32) -> impl IntoView {
    let seq = toast.seq;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
        notifications.update(|s| s.dismiss(seq));
    });
    #[cfg(not(feature = "csr"))]
    log::trace!("toast {seq} stays until dismissed (timeout {timeout_ms}ms needs a browser)");

    let class = format!("toast {}", toast.notification.severity.css_modifier());
    view! {
        <div class=class role="status" on:click=move |_| notifications.update(|s| s.dismiss(seq))>
            {toast.notification.message}
        </div>
    }
}
