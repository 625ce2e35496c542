//! Admin Panel Frontend Entry Point

mod app;
mod components;
mod context;
mod i18n;
mod models;
mod nav;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
