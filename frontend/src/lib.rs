//! Browser entry point: hydrates the server-rendered cinelist pages.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Sets up browser logging and panic reporting, then hydrates the page body with
/// [`app::component`].
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
