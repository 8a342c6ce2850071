//! Product catalog page: table, form modal, and delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires UI events to the `ProductController`
//! held in context and applies the `CatalogEvent`s it returns: toasts are
//! queued, the form modal is hidden on `CloseModal`, and warnings move focus
//! to the offending input.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::product_form_modal::ProductFormModal;
use crate::components::product_table::ProductTable;
use crate::components::toast_stack::ToastStack;
use crate::config::CatalogConfig;
use crate::controller::{CatalogEvent, ConfirmOutcome, ConfirmRequest, ProductController};
use crate::state::catalog::{CatalogState, Product, ProductId};
use crate::state::notifications::NotificationState;
use crate::store::HostStore;
use crate::util::focus::focus_field;

/// Controller handle shared through context.
pub type SharedController = StoredValue<ProductController<HostStore>, LocalStorage>;

/// Signals the page event handlers operate on.
#[derive(Clone, Copy)]
struct PageSignals {
    controller: SharedController,
    catalog: RwSignal<CatalogState>,
    notifications: RwSignal<NotificationState>,
    modal_open: RwSignal<bool>,
    confirm: RwSignal<Option<ConfirmRequest>>,
}

impl PageSignals {
    /// Run a controller operation against the view model, then apply its events.
    fn run<F>(self, op: F)
    where
        F: FnOnce(&mut ProductController<HostStore>, &mut CatalogState) -> Vec<CatalogEvent>,
    {
        let mut events = Vec::new();
        self.controller.update_value(|ctl| {
            self.catalog.update(|state| events = op(ctl, state));
        });
        self.dispatch(events);
    }

    fn dispatch(self, events: Vec<CatalogEvent>) {
        for event in events {
            match event {
                CatalogEvent::Notify(notification) => {
                    self.notifications.update(|s| {
                        s.push(notification);
                    });
                }
                CatalogEvent::CloseModal => self.modal_open.set(false),
                CatalogEvent::FocusField(field) => focus_field(field),
            }
        }
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = expect_context::<CatalogConfig>();
    let signals = PageSignals {
        controller: expect_context::<SharedController>(),
        catalog: expect_context::<RwSignal<CatalogState>>(),
        notifications: expect_context::<RwSignal<NotificationState>>(),
        modal_open: RwSignal::new(false),
        confirm: RwSignal::new(None::<ConfirmRequest>),
    };

    let on_create = move |_| {
        signals.run(|ctl, state| {
            ctl.open_create(state);
            Vec::new()
        });
        signals.modal_open.set(true);
    };

    let on_edit = Callback::new(move |product: Product| {
        signals.run(|ctl, state| {
            ctl.open_edit(state, &product);
            Vec::new()
        });
        signals.modal_open.set(true);
    });

    let on_save = Callback::new(move |()| signals.run(|ctl, state| ctl.submit(state)));
    let on_close = Callback::new(move |()| signals.run(|ctl, state| ctl.close(state)));

    let on_delete = Callback::new(move |id: ProductId| {
        let mut request = None;
        signals.run(|ctl, state| {
            request = Some(ctl.request_delete(state, id));
            Vec::new()
        });
        signals.confirm.set(request);
    });

    let on_resolve = Callback::new(move |outcome: ConfirmOutcome| {
        signals.confirm.set(None);
        signals.run(|ctl, state| ctl.resolve_delete(state, Ok(outcome)));
    });

    let products = Signal::derive(move || signals.catalog.with(|s| s.products.clone()));

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Products"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Add"
                </button>
            </header>

            <ProductTable
                products=products
                currency_symbol=config.currency_symbol.clone()
                on_edit=on_edit
                on_delete=on_delete
            />

            <Show when=move || signals.modal_open.get()>
                <ProductFormModal catalog=signals.catalog on_save=on_save on_close=on_close/>
            </Show>

            {move || {
                signals
                    .confirm
                    .get()
                    .map(|request| view! { <ConfirmDialog request=request on_resolve=on_resolve/> })
            }}

            <ToastStack notifications=signals.notifications timeout_ms=config.toast_timeout_ms/>
        </div>
    }
}
