//! Shared navbar loader.
//!
//! Fetches the navbar fragment, injects it at the top of `<body>`, then
//! wires the fragment's own menu toggle and in-page anchor scrolling.
//! Every failure is logged and the page simply goes without a navbar.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shopfront::config::SiteConfig;
use shopfront::navbar::{NavLink, NavbarMenu, NavbarView, classify_link};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{query_all, set_attr, set_class};
use crate::selectors;
use crate::wiring::listen;

/// Why the navbar could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum NavbarError {
    #[error("request failed: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("document has no body")]
    NoBody,
    #[error("failed to inject markup: {0}")]
    Inject(String),
}

/// Start loading the navbar in the background.
pub fn spawn_load(config: &SiteConfig) {
    let path = config.navbar_path.clone();
    let scroll_delay_ms = config.anchor_scroll_delay_ms;
    leptos::task::spawn_local(async move {
        match load(&path).await {
            Ok(document) => wire(&document, scroll_delay_ms),
            Err(err) => log::error!("failed to load navbar from {path}: {err}"),
        }
    });
}

async fn fetch_fragment(path: &str) -> Result<String, NavbarError> {
    let resp = gloo_net::http::Request::get(path).send().await?;
    if !resp.ok() {
        return Err(NavbarError::Status(resp.status()));
    }
    Ok(resp.text().await?)
}

async fn load(path: &str) -> Result<Document, NavbarError> {
    let html = fetch_fragment(path).await?;
    let document = web_sys::window().and_then(|w| w.document()).ok_or(NavbarError::NoBody)?;
    let body = document.body().ok_or(NavbarError::NoBody)?;
    body.insert_adjacent_html("afterbegin", &html)
        .map_err(|err| NavbarError::Inject(format!("{err:?}")))?;
    log::debug!("navbar injected from {path}");
    Ok(document)
}

/// The injected fragment's elements. Each may be missing.
struct NavbarElements {
    trigger: Option<Element>,
    panel: Option<Element>,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
}

impl NavbarElements {
    fn lookup(document: &Document) -> Self {
        Self {
            trigger: document.get_element_by_id(selectors::MENU_TRIGGER_ID),
            panel: document.get_element_by_id(selectors::MENU_PANEL_ID),
            overlay: document.get_element_by_id(selectors::MENU_OVERLAY_ID),
            body: document.body(),
        }
    }

    fn render(&self, view: NavbarView) {
        if let Some(panel) = &self.panel {
            set_class(panel, selectors::PANEL_OPEN_CLASS, view.panel_open);
        }
        if let Some(overlay) = &self.overlay {
            set_class(overlay, selectors::OVERLAY_ACTIVE_CLASS, view.overlay_active);
        }
        if let Some(trigger) = &self.trigger {
            set_attr(trigger, "aria-expanded", view.aria_expanded);
        }
        if let Some(body) = &self.body {
            if let Err(err) = body.style().set_property("overflow", view.body_overflow) {
                log::debug!("set overflow failed: {err:?}");
            }
        }
    }
}

#[derive(Clone)]
struct NavbarHandle {
    menu: Rc<Cell<NavbarMenu>>,
    elements: Rc<NavbarElements>,
}

impl NavbarHandle {
    fn set(&self, show: Option<bool>) {
        let mut menu = self.menu.get();
        let view = menu.set(show);
        self.menu.set(menu);
        self.elements.render(view);
    }

    fn is_open(&self) -> bool {
        self.menu.get().is_open()
    }
}

fn wire(document: &Document, scroll_delay_ms: u32) {
    let handle = NavbarHandle {
        menu: Rc::new(Cell::new(NavbarMenu::default())),
        elements: Rc::new(NavbarElements::lookup(document)),
    };

    if let Some(trigger) = &handle.elements.trigger {
        let h = handle.clone();
        listen(trigger, "click", move |_| h.set(None));
    }
    if let Some(overlay) = &handle.elements.overlay {
        let h = handle.clone();
        listen(overlay, "click", move |_| h.set(Some(false)));
    }
    if let Some(window) = web_sys::window() {
        let h = handle.clone();
        listen(&window, "keydown", move |event| {
            let is_escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|e| e.key() == "Escape");
            if is_escape {
                h.set(Some(false));
            }
        });
    }

    let Some(panel) = handle.elements.panel.clone() else {
        return;
    };
    for link in query_all(&panel, selectors::NAVBAR_LINKS) {
        let h = handle.clone();
        let doc = document.clone();
        let source = link.clone();
        listen(&link, "click", move |event| {
            let href = source.get_attribute("href").unwrap_or_default();
            if h.is_open() {
                h.set(Some(false));
            }
            if let NavLink::SamePageAnchor(id) = classify_link(&href) {
                event.prevent_default();
                if let Some(target) = id.and_then(|id| doc.get_element_by_id(&id)) {
                    Timeout::new(scroll_delay_ms, move || smooth_scroll(&target)).forget();
                }
            }
        });
    }
}

fn smooth_scroll(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
