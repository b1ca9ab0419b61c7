//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::inventory::Inventory;
use crate::models::InventoryItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical record collection and its mutation surface
    pub inventory: Inventory,
    /// Selected category filter, empty = show all
    pub filter_category: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::with_items(seed_items()),
            filter_category: String::new(),
        }
    }
}

/// Demo records shown on first render
fn seed_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(1, "Laptop", "Electronics", 15),
        InventoryItem::new(2, "Notebook", "Stationery", 8),
        InventoryItem::new(3, "Mouse", "Electronics", 5),
    ]
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
