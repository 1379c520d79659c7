#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod audio;
pub mod components;
pub mod dom;
pub mod game;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Apply the saved theme before the first paint
    crate::theme::restore_theme(&crate::game::load_config().theme_key);
    yew::Renderer::<app::App>::new().render();
}
