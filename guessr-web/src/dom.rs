use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context where `window` is unavailable.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("`window` unavailable"))
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the document cannot be accessed from the current window.
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("`document` unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Move keyboard focus to the element with `id`, if it exists.
pub fn focus_by_id(id: &str) {
    if let Some(el) = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Seed for a new page load, mixed from `Math.random` and the wall clock.
#[must_use]
pub fn entropy_seed() -> u64 {
    use guessr_game::numbers::round_f64_to_u32;

    let noise = round_f64_to_u32(js_sys::Math::random() * f64::from(u32::MAX));
    let clock = round_f64_to_u32(js_sys::Date::now() % f64::from(u32::MAX));
    (u64::from(noise) << 32) | u64::from(clock)
}
