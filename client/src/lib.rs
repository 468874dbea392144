//! # shopfront-client
//!
//! WebAssembly host for the storefront enhancement layer. Looks up the
//! page's markup, turns DOM events into `shopfront` UI events, and applies
//! the resulting commands back onto the page. Also owns the things only a
//! browser can do: timers, view transitions, the navbar fetch, and the
//! Leptos-rendered toast region.
//!
//! Browser code sits behind the `csr` feature; without it only the pure
//! helpers (selectors, toast styling, the toast host component) compile,
//! which keeps native `cargo test` working.

pub mod selectors;
pub mod toast_host;

#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod globals;
#[cfg(feature = "csr")]
pub mod motion;
#[cfg(feature = "csr")]
pub mod navbar;
#[cfg(feature = "csr")]
pub mod runtime;
#[cfg(feature = "csr")]
pub mod storage;
#[cfg(feature = "csr")]
pub mod wiring;

/// Entry point run by the generated JS glue once the module is instantiated.
///
/// The module script is deferred, so the document is parsed by now.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    runtime::boot();
}
