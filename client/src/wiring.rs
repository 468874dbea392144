//! DOM listeners that translate browser events into [`UiEvent`]s.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `forget()`.

use shopfront::forms::FormAction;
use shopfront::site::UiEvent;
use shopfront::tabs::TabKey;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::dom::query_all;
use crate::runtime::Runtime;
use crate::selectors;

/// Attach `handler` to `target` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
        return;
    }
    closure.forget();
}

/// Element the event was dispatched on, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

pub fn wire(runtime: &Runtime) {
    wire_menu(runtime);
    wire_tabs(runtime);
    wire_form_actions(runtime);
}

fn wire_menu(runtime: &Runtime) {
    let dom = runtime.dom();
    if let Some(trigger) = dom.trigger() {
        let rt = runtime.clone();
        listen(trigger, "click", move |_| rt.dispatch(UiEvent::MenuTriggerClicked));
    }
    if let Some(overlay) = dom.overlay() {
        let rt = runtime.clone();
        listen(overlay, "click", move |_| rt.dispatch(UiEvent::OverlayClicked));
    }
    if let Some(panel) = dom.panel() {
        let rt = runtime.clone();
        listen(panel, "click", move |event| {
            if closest(&event, selectors::PANEL_ACTIONS).is_none() {
                return;
            }
            let viewport_width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(f64::INFINITY);
            rt.dispatch(UiEvent::PanelActionClicked { viewport_width });
        });
    }

    let document = dom.document();
    let rt = runtime.clone();
    listen(document, "keydown", move |event| {
        if let Some(key) = key_of(&event) {
            rt.dispatch(UiEvent::KeyDown { key });
        }
    });
    let rt = runtime.clone();
    listen(document, "focusin", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside_panel = rt.dom().panel_contains(target.as_ref());
        rt.dispatch(UiEvent::FocusIn { inside_panel });
    });
}

fn wire_tabs(runtime: &Runtime) {
    for (index, button) in runtime.dom().tab_buttons().iter().enumerate() {
        let rt = runtime.clone();
        let tab = button.get_attribute(selectors::TAB_DATA_ATTR).unwrap_or_default();
        listen(button, "click", move |_| rt.dispatch(UiEvent::TabClicked { tab: tab.clone() }));

        let rt = runtime.clone();
        listen(button, "keydown", move |event| {
            let Some(key) = key_of(&event).as_deref().and_then(TabKey::parse) else {
                return;
            };
            event.prevent_default();
            rt.dispatch(UiEvent::TabKeyDown { index, key });
        });
    }

    if let Some(body) = runtime.dom().body() {
        let rt = runtime.clone();
        listen(body, "click", move |event| {
            let Some(marker) = closest(&event, selectors::GO_TO_TAB) else {
                return;
            };
            let target = marker.get_attribute(selectors::GO_TO_TAB_ATTR).unwrap_or_default();
            rt.dispatch(UiEvent::GoToTabClicked { target });
        });
    }

    if let Some(window) = web_sys::window() {
        let rt = runtime.clone();
        let location = window.location();
        listen(&window, "hashchange", move |_| {
            let fragment = location.hash().unwrap_or_default();
            rt.dispatch(UiEvent::HashChanged { fragment });
        });
    }
}

fn wire_form_actions(runtime: &Runtime) {
    let Some(root) = runtime.dom().document().document_element() else {
        return;
    };
    for button in query_all(&root, selectors::FORM_ACTIONS) {
        let rt = runtime.clone();
        let source = button.clone();
        listen(&button, "click", move |_| {
            let Some(card) = source.closest(selectors::CARD).ok().flatten() else {
                return;
            };
            match FormAction::from_class_name(&source.class_name()) {
                FormAction::Reset => rt.dom().reset_card(&card),
                FormAction::Save => {
                    let card_id = Some(card.id()).filter(|id| !id.is_empty());
                    rt.dispatch(UiEvent::SaveRequested { card_id });
                }
            }
        });
    }
}
