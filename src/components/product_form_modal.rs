//! Reusable create/edit form modal.
//!
//! DESIGN
//! ======
//! The modal only edits the raw form text held in `CatalogState`; saving and
//! closing are delegated to the page so the controller decides when the
//! modal actually goes away.

#[cfg(test)]
#[path = "product_form_modal_test.rs"]
mod product_form_modal_test;

use leptos::prelude::*;

use crate::state::catalog::{CatalogState, Field};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKey {
    Save,
    Close,
}

/// Escape closes from anywhere in the modal. Enter saves only when pressed
/// in a text input, so Enter on a focused button keeps its click.
pub fn form_key(key: &str, from_input: bool) -> Option<FormKey> {
    match key {
        "Escape" => Some(FormKey::Close),
        "Enter" if from_input => Some(FormKey::Save),
        _ => None,
    }
}

#[component]
pub fn ProductFormModal(
    catalog: RwSignal<CatalogState>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = move || catalog.with(|s| s.modal_title());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if form_key(&ev.key(), false) == Some(FormKey::Close) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--product"
                role="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) aria-label="close">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">
                    {Field::ALL
                        .into_iter()
                        .map(|field| view! { <FormInput catalog=catalog field=field on_save=on_save/> })
                        .collect_view()}
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormInput(catalog: RwSignal<CatalogState>, field: Field, on_save: Callback<()>) -> impl IntoView {
    let input_mode = if field == Field::Price { "decimal" } else { "text" };

    view! {
        <label class="dialog__label">
            {field.label()}
            <input
                id=field.input_id()
                class="dialog__input"
                type="text"
                inputmode=input_mode
                placeholder=field.placeholder()
                autofocus={field == Field::Title}
                prop:value=move || catalog.with(|s| s.form.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    catalog.update(|s| s.form.set(field, value));
                }
                on:keydown=move |ev| {
                    if form_key(&ev.key(), true) == Some(FormKey::Save) {
                        ev.prevent_default();
                        on_save.run(());
                    }
                }
            />
        </label>
    }
}
