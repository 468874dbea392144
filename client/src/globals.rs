//! Functions and data exposed on `window` for other pages' scripts.
//!
//! - `addToCart(quantity?)`: bump the persisted cart count.
//! - `shopfrontImagePaths(product, color)`: image URLs of one colour.
//! - `EBENEZER_VARIANTS` (alias `SHOPFRONT_VARIANTS`): frozen catalog table
//!   keyed by product name.

use serde_json::Value;
use shopfront::cart::Quantity;
use shopfront::catalog;
use shopfront::site::UiEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;

use crate::runtime::Runtime;
use crate::selectors::{ADD_TO_CART_GLOBAL, IMAGE_PATHS_GLOBAL, VARIANTS_ALIAS_GLOBAL, VARIANTS_GLOBAL};

/// Map a script argument to a quantity. A missing (`undefined`) argument
/// means one item; anything else is coerced like `Number(x) || 0`.
fn quantity_of(arg: &JsValue) -> Quantity {
    if arg.is_undefined() {
        return Quantity::Default;
    }
    let value = if let Some(n) = arg.as_f64() {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    } else if let Some(s) = arg.as_string() {
        Value::String(s)
    } else if let Some(b) = arg.as_bool() {
        Value::Bool(b)
    } else {
        Value::Null
    };
    Quantity::Raw(value)
}

fn set_global(window: &web_sys::Window, name: &str, value: &JsValue) {
    if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(name), value) {
        log::warn!("failed to expose window.{name}: {err:?}");
    }
}

pub fn install(runtime: &Runtime) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let rt = runtime.clone();
    let add_to_cart = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
        rt.dispatch(UiEvent::AddToCart { quantity: quantity_of(&arg) });
    });
    set_global(&window, ADD_TO_CART_GLOBAL, add_to_cart.as_ref().unchecked_ref());
    add_to_cart.forget();

    let image_root = runtime.config().image_root.clone();
    let image_paths = Closure::<dyn Fn(String, String) -> js_sys::Array>::new(move |product: String, color: String| {
        catalog::variant(&product)
            .map(|v| v.image_paths(&image_root, &color))
            .unwrap_or_default()
            .into_iter()
            .map(JsValue::from)
            .collect()
    });
    set_global(&window, IMAGE_PATHS_GLOBAL, image_paths.as_ref().unchecked_ref());
    image_paths.forget();

    match catalog::catalog_json().map(|json| js_sys::JSON::parse(&json)) {
        Ok(Ok(table)) => {
            deep_freeze(&table);
            set_global(&window, VARIANTS_GLOBAL, &table);
            set_global(&window, VARIANTS_ALIAS_GLOBAL, &table);
        }
        Ok(Err(err)) => log::warn!("failed to parse catalog table: {err:?}"),
        Err(err) => log::warn!("failed to encode catalog table: {err}"),
    }
}

fn deep_freeze(value: &JsValue) {
    let Some(object) = value.dyn_ref::<js_sys::Object>() else {
        return;
    };
    for child in js_sys::Object::values(object).iter() {
        deep_freeze(&child);
    }
    js_sys::Object::freeze(object);
}
