//! Product list table with per-row edit and delete actions.

use leptos::prelude::*;

use crate::state::catalog::{Product, ProductId};
use crate::util::currency::format_price;

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    currency_symbol: String,
    on_edit: Callback<Product>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let rows = move || {
        products
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, product)| {
                let price = format_price(product.price, &currency_symbol);
                let id = product.id;
                let Product { title, description, .. } = product.clone();
                view! {
                    <tr>
                        <td>{i + 1}</td>
                        <td>{title}</td>
                        <td>{description}</td>
                        <td class="product-table__price">{price}</td>
                        <td class="product-table__actions">
                            <button
                                class="btn btn--warning"
                                title="Edit product"
                                on:click=move |_| on_edit.run(product.clone())
                            >
                                "Edit"
                            </button>
                            <button class="btn btn--danger" title="Delete product" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="product-table__wrap">
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Product"</th>
                        <th>"Description"</th>
                        <th>"Price"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || products.with(Vec::is_empty)>
                <p class="product-table__empty">"No products yet."</p>
            </Show>
        </div>
    }
}
