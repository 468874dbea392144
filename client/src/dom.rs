//! The page's DOM contract and the projection of core commands onto it.
//!
//! Elements are looked up once at startup. Anything missing turns the
//! matching projection into a no-op; nothing here fails loudly.

use std::cell::RefCell;

use shopfront::forms::{CardFields, FieldKind, FieldState};
use shopfront::menu::MenuEffect;
use shopfront::site::PageLayout;
use shopfront::tabs::{TabName, TabView};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::selectors;

pub struct Dom {
    document: Document,
    body: Option<HtmlElement>,
    trigger: Option<HtmlElement>,
    panel: Option<HtmlElement>,
    overlay: Option<HtmlElement>,
    cart_badge: Option<HtmlElement>,
    tab_panels: Vec<(TabName, HtmlElement)>,
    tab_buttons: Vec<HtmlElement>,
    /// `body.style.overflow` from before the scroll lock.
    saved_overflow: RefCell<Option<String>>,
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class toggle {class} failed: {err:?}");
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::debug!("set {name} failed: {err:?}");
    }
}

impl Dom {
    pub fn lookup(document: Document) -> Self {
        let body = document.body();
        let trigger = html_by_id(&document, selectors::MENU_TRIGGER_ID);
        let panel = html_by_id(&document, selectors::MENU_PANEL_ID);
        let overlay = html_by_id(&document, selectors::MENU_OVERLAY_ID);
        let cart_badge = html_by_id(&document, selectors::CART_BADGE_ID);
        let tab_panels = TabName::ALL
            .into_iter()
            .filter_map(|tab| html_by_id(&document, &tab.panel_id()).map(|el| (tab, el)))
            .collect();
        let tab_buttons = document
            .document_element()
            .map(|root| query_all(&root, selectors::TAB_BUTTON))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            document,
            body,
            trigger,
            panel,
            overlay,
            cart_badge,
            tab_panels,
            tab_buttons,
            saved_overflow: RefCell::new(None),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> Option<&HtmlElement> {
        self.body.as_ref()
    }

    pub fn trigger(&self) -> Option<&HtmlElement> {
        self.trigger.as_ref()
    }

    pub fn panel(&self) -> Option<&HtmlElement> {
        self.panel.as_ref()
    }

    pub fn overlay(&self) -> Option<&HtmlElement> {
        self.overlay.as_ref()
    }

    pub fn tab_buttons(&self) -> &[HtmlElement] {
        &self.tab_buttons
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            menu_present: self.trigger.is_some() && self.panel.is_some() && self.overlay.is_some(),
            tab_panels: self.tab_panels.iter().map(|(tab, _)| *tab).collect(),
            tab_buttons: self
                .tab_buttons
                .iter()
                .map(|button| button.get_attribute(selectors::TAB_DATA_ATTR).unwrap_or_default())
                .collect(),
        }
    }

    /// Whether `target` is the panel or one of its descendants.
    pub fn panel_contains(&self, target: Option<&web_sys::Node>) -> bool {
        self.panel.as_ref().is_some_and(|panel| panel.contains(target))
    }

    pub fn apply_menu(&self, effects: &[MenuEffect]) {
        for effect in effects {
            self.apply_menu_effect(*effect);
        }
    }

    fn apply_menu_effect(&self, effect: MenuEffect) {
        match effect {
            MenuEffect::SetPanelOpen(on) => {
                if let Some(panel) = &self.panel {
                    set_class(panel, selectors::PANEL_OPEN_CLASS, on);
                }
            }
            MenuEffect::SetOverlayActive(on) => {
                if let Some(overlay) = &self.overlay {
                    set_class(overlay, selectors::OVERLAY_ACTIVE_CLASS, on);
                }
            }
            MenuEffect::SetOverlayHidden(hidden) => {
                if let Some(overlay) = &self.overlay {
                    overlay.set_hidden(hidden);
                }
            }
            MenuEffect::SetTriggerExpanded(expanded) => {
                if let Some(trigger) = &self.trigger {
                    set_attr(trigger, "aria-expanded", if expanded { "true" } else { "false" });
                }
            }
            MenuEffect::LockScroll => {
                if let Some(body) = &self.body {
                    let style = body.style();
                    let previous = style.get_property_value("overflow").unwrap_or_default();
                    *self.saved_overflow.borrow_mut() = Some(previous);
                    self.set_body_overflow("hidden");
                }
            }
            MenuEffect::UnlockScroll => {
                let previous = self.saved_overflow.borrow_mut().take().unwrap_or_default();
                self.set_body_overflow(&previous);
            }
            MenuEffect::FocusFirstInPanel => {
                let first = self
                    .panel
                    .as_ref()
                    .and_then(|panel| panel.query_selector(selectors::FOCUSABLE).ok().flatten())
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(first) = first {
                    focus(&first);
                }
            }
            MenuEffect::FocusTrigger => {
                if let Some(trigger) = &self.trigger {
                    focus(trigger);
                }
            }
        }
    }

    pub fn set_body_overflow(&self, value: &str) {
        let Some(body) = &self.body else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::debug!("set overflow failed: {err:?}");
        }
    }

    pub fn apply_tabs(&self, view: &TabView) {
        for panel in &view.panels {
            if let Some((_, el)) = self.tab_panels.iter().find(|(tab, _)| *tab == panel.tab) {
                el.set_hidden(panel.hidden);
            }
        }
        for (button, state) in self.tab_buttons.iter().zip(&view.buttons) {
            set_class(button, selectors::TAB_ACTIVE_CLASS, state.selected);
            set_attr(button, "aria-selected", if state.selected { "true" } else { "false" });
            button.set_tab_index(state.tab_index);
        }
    }

    pub fn focus_tab_button(&self, index: usize) {
        if let Some(button) = self.tab_buttons.get(index) {
            focus(button);
        }
    }

    pub fn set_cart_badge(&self, text: &str) {
        if let Some(badge) = &self.cart_badge {
            badge.set_text_content(Some(text));
        }
    }

    /// Swap the current history entry's fragment without adding an entry.
    pub fn replace_fragment(&self, fragment: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let history = match window.history() {
            Ok(history) => history,
            Err(err) => {
                log::warn!("history unavailable: {err:?}");
                return;
            }
        };
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
            log::warn!("replaceState failed: {err:?}");
        }
    }

    pub fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {err:?}");
        }
    }

    /// Clear text-like fields of `card` and rewind its selects.
    pub fn reset_card(&self, card: &Element) {
        let elements = query_all(card, selectors::CARD_FIELDS);
        let mut fields = CardFields {
            id: Some(card.id()).filter(|id| !id.is_empty()),
            fields: elements.iter().map(read_field).collect(),
        };
        fields.reset();
        for (element, field) in elements.iter().zip(&fields.fields) {
            write_field(element, field);
        }
        log::debug!("reset card {}", fields.id.as_deref().unwrap_or("(no id)"));
    }
}

fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        log::debug!("focus failed: {err:?}");
    }
}

fn read_field(element: &Element) -> FieldState {
    // The `type` property, not the attribute: browsers report unknown
    // types as "text".
    let input_type = element.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::type_).unwrap_or_default();
    let kind = FieldKind::from_tag(&element.tag_name(), &input_type);
    let (value, selected_index) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        (input.value(), 0)
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        (area.value(), 0)
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        (select.value(), usize::try_from(select.selected_index()).unwrap_or(0))
    } else {
        (String::new(), 0)
    };
    FieldState { kind, value, selected_index }
}

fn write_field(element: &Element, field: &FieldState) {
    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Password => {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_value(&field.value);
            }
        }
        FieldKind::TextArea => {
            if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                area.set_value(&field.value);
            }
        }
        FieldKind::Select => {
            if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
                select.set_selected_index(i32::try_from(field.selected_index).unwrap_or(0));
            }
        }
        FieldKind::Other => {}
    }
}
