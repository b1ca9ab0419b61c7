//! Inventory Frontend Entry Point

mod app;
mod components;
mod inventory;
mod models;
mod notify;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
