mod app;

use app::main::Main;
use leptos::prelude::*;

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Starting anecdotes v{}", env!("CARGO_PKG_VERSION"));
    mount_to_body(|| {
        view! { <Main /> }
    })
}
