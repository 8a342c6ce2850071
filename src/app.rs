//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::CatalogConfig;
use crate::controller::ProductController;
use crate::pages::products::{ProductsPage, SharedController};
use crate::state::catalog::CatalogState;
use crate::state::notifications::NotificationState;
use crate::store::{HostStore, ProductStore};

/// Root application component.
///
/// Opens the host store, loads the catalog once, and provides the shared
/// state contexts before setting up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = CatalogConfig::default();
    let store = ProductStore::new(HostStore::open(), config.storage_key.clone());
    let mut controller = ProductController::new(store);
    let mut catalog = CatalogState::default();
    controller.load(&mut catalog);

    provide_context(config);
    provide_context(RwSignal::new(catalog));
    provide_context(RwSignal::new(NotificationState::default()));
    provide_context::<SharedController>(StoredValue::new_local(controller));

    view! {
        <Title text="Product Catalog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductsPage/>
            </Routes>
        </Router>
    }
}
