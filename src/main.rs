mod api;
mod app;
mod carousel;
mod components;
mod context;
mod data;
mod map;
mod model;
mod pages;
mod utils;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // CSR only; nothing to do on native targets.
}
