//! Browser side of the animation strategy: capability detection and
//! running a batch of DOM changes inside a view transition.

use std::cell::RefCell;
use std::rc::Rc;

use shopfront::motion::MotionStrategy;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const START_VIEW_TRANSITION: &str = "startViewTransition";

fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) | Err(_) => false,
    }
}

fn supports_view_transition(document: &web_sys::Document) -> bool {
    js_sys::Reflect::has(document, &JsValue::from_str(START_VIEW_TRANSITION)).unwrap_or(false)
}

/// Detect the strategy once at startup.
pub fn detect(window: &web_sys::Window, document: &web_sys::Document) -> MotionStrategy {
    MotionStrategy::select(prefers_reduced_motion(window), supports_view_transition(document))
}

/// Run `apply` inside `document.startViewTransition`, or directly when the
/// API is missing or throws.
pub fn run_in_view_transition(document: &web_sys::Document, apply: impl FnOnce() + 'static) {
    let slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(apply))));
    let run = {
        let slot = Rc::clone(&slot);
        move || {
            let pending = slot.borrow_mut().take();
            if let Some(apply) = pending {
                apply();
            }
        }
    };

    let start = js_sys::Reflect::get(document, &JsValue::from_str(START_VIEW_TRANSITION))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(start) = start {
        let callback = Closure::once_into_js(run.clone());
        if start.call1(document, &callback).is_ok() {
            return;
        }
        log::debug!("startViewTransition failed, applying directly");
    }
    run();
}
