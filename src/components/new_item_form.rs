//! New Item Form Component
//!
//! Entry form for adding inventory records.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::ItemDraft;
use crate::notify;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new inventory records
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            name: name.get(),
            category: category.get(),
            quantity: quantity.get(),
        };
        let added = store.inventory().write().add(&draft);
        match added {
            Ok(id) => {
                web_sys::console::log_1(&format!("[NewItemForm] Added item #{}", id).into());
                set_name.set(String::new());
                set_category.set(String::new());
                set_quantity.set(String::new());
            }
            // Keep the entered values so they can be corrected
            Err(err) => notify::alert(&err.to_string()),
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Category"
                prop:value=move || category.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_category.set(input.value());
                }
            />
            <input
                type="number"
                placeholder="Quantity"
                prop:value=move || quantity.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_quantity.set(input.value());
                }
            />
            <button type="submit">"Add Item"</button>
        </form>
    }
}
