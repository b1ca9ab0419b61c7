//! Inventory Table Component
//!
//! Renders the filtered record projection with per-row actions.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::inventory::apply_filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Table over the current filtered/sorted projection
#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = use_app_store();

    let visible_items = move || {
        let filter = store.filter_category().get();
        let inventory = store.inventory().read();
        apply_filter(inventory.items(), &filter)
    };

    view! {
        <table class="inventory-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Quantity"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=visible_items
                    // Key on every committed field so saved edits re-render the row
                    key=|item| {
                        (
                            item.id,
                            item.is_editing,
                            item.name.clone(),
                            item.category.clone(),
                            item.quantity,
                        )
                    }
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </tbody>
        </table>

        <div class="legend">
            <span class="badge low-stock">"Low Stock (Quantity Below 10)"</span>
        </div>
    }
}
