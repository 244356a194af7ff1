//! Nutrition Frontend Entry Point

mod actions;
mod api;
mod app;
mod charts;
mod components;
mod config;
mod context;
mod favorites;
mod grocery;
mod in_flight;
mod meal_plan;
mod modal;
mod models;
mod notification;
mod nutrition;
mod pages;
mod recently_viewed;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("Starting nutrition frontend");
    mount_to_body(App);
}
