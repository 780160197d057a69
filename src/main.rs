#![allow(warnings)]
//! Orders Console Frontend Entry Point

mod models;
mod numeric;
mod error;
mod config;
mod commands;
mod render;
mod form;
mod dom;
mod bridge;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
