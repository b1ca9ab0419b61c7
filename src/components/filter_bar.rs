//! Filter Bar Component
//!
//! Category filter dropdown and the quantity sort trigger.

use leptos::prelude::*;

use crate::inventory::distinct_categories;
use crate::models::SortOrder;
use crate::store::{use_app_store, AppStateStoreFields};

/// Category filter and sort controls
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Recomputed from live records, so categories added after the last
    // selection show up immediately
    let categories = move || {
        let inventory = store.inventory().read();
        distinct_categories(inventory.items())
    };

    let sort_arrow = move || match store.inventory().read().sort_order() {
        SortOrder::Asc => "↑",
        SortOrder::Desc => "↓",
    };

    view! {
        <div class="filter-bar">
            <label>"Filter by Category"</label>
            <select
                id="category-filter"
                prop:value=move || store.filter_category().get()
                on:change=move |ev| store.filter_category().set(event_target_value(&ev))
            >
                <option value="">"All"</option>
                <For
                    each=categories
                    key=|category| category.clone()
                    children=move |category| {
                        view! { <option value=category.clone()>{category.clone()}</option> }
                    }
                />
            </select>

            <button
                class="sort-btn"
                on:click=move |_| store.inventory().write().sort_by_quantity()
            >
                "Sort by Quantity " {sort_arrow}
            </button>
        </div>
    }
}
