//! WASM entry point
//!
//! Trunk compiles this to WASM and mounts [`App`] on the document body.

use folio_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
