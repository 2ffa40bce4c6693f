mod app;
mod core;
mod features;
mod models;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Starting activity board".into());
    leptos::mount::mount_to_body(App);
}
