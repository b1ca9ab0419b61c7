//! Inventory Frontend App
//!
//! Main application component wiring the store, form, filter bar, and table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, InventoryTable, NewItemForm};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    view! {
        <main class="container">
            <h1>"Inventory Management"</h1>

            <NewItemForm />
            <FilterBar />
            <InventoryTable />

            <p class="item-count">
                {move || format!("{} items", store.inventory().read().items().len())}
            </p>
        </main>
    }
}
