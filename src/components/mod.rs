//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod inventory_table;
mod item_row;
mod new_item_form;

pub use filter_bar::FilterBar;
pub use inventory_table::InventoryTable;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
