mod components;
mod dom;
mod model;
mod state;
mod util;

use components::app::App;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gitwidget landing page starting");
    yew::Renderer::<App>::new().render();
}
