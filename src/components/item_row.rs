//! Item Row Component
//!
//! A single table row, switching per cell between static text and
//! inline edit inputs.

use leptos::prelude::*;

use crate::models::{InventoryItem, ItemDraft};
use crate::notify;
use crate::store::{use_app_store, AppStateStoreFields};

/// One inventory record row with edit/save/delete actions
#[component]
pub fn ItemRow(item: InventoryItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let is_editing = item.is_editing;

    // In-progress edit values for this row only. Initialized from the
    // committed fields and merged back on a successful save; a delete
    // while editing discards them with the row.
    let (name, set_name) = signal(item.name.clone());
    let (category, set_category) = signal(item.category.clone());
    let (quantity, set_quantity) = signal(item.quantity.to_string());

    let save_edit = move |_| {
        let draft = ItemDraft {
            name: name.get(),
            category: category.get(),
            quantity: quantity.get(),
        };
        let saved = store.inventory().write().save_edit(id, &draft);
        if let Err(err) = saved {
            // Row stays in edit mode with the entered values
            notify::alert(&err.to_string());
        }
    };

    let row_class = if item.is_low_stock() {
        "item-row low-stock"
    } else {
        "item-row"
    };

    view! {
        <tr class=row_class>
            <td>
                {if is_editing {
                    view! {
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    }
                    .into_any()
                } else {
                    view! { <span>{item.name.clone()}</span> }.into_any()
                }}
            </td>
            <td>
                {if is_editing {
                    view! {
                        <input
                            type="text"
                            prop:value=move || category.get()
                            on:input=move |ev| set_category.set(event_target_value(&ev))
                        />
                    }
                    .into_any()
                } else {
                    view! { <span>{item.category.clone()}</span> }.into_any()
                }}
            </td>
            <td>
                {if is_editing {
                    view! {
                        <input
                            type="number"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                    }
                    .into_any()
                } else {
                    view! { <span>{item.quantity}</span> }.into_any()
                }}
            </td>
            <td>
                {if is_editing {
                    view! {
                        <button class="save-btn" on:click=save_edit>"Save"</button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class="edit-btn"
                            on:click=move |_| store.inventory().write().toggle_edit(id)
                        >
                            "Edit"
                        </button>
                    }
                    .into_any()
                }}
                <button
                    class="delete-btn"
                    on:click=move |_| store.inventory().write().delete(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
