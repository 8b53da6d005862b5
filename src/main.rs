//! Wish/Offer Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod facet;
mod models;
mod paging;
mod resolver;
mod search;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
