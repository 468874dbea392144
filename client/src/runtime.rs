//! Startup and the glue between DOM events and [`Site`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every listener funnels into [`Runtime::dispatch`]: the site borrow is
//! released before the returned commands are projected, so a command that
//! triggers another event (a timer, a toast) never re-enters a live borrow.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shopfront::config::{CONFIG_ELEMENT_ID, SiteConfig};
use shopfront::menu::{MenuTransition, ScheduledFinish};
use shopfront::site::{Command, Site, UiEvent};
use web_sys::Document;

use crate::dom::Dom;
use crate::motion;
use crate::storage::LocalStorage;
use crate::toast_host::Toasts;
use crate::{globals, navbar, wiring};

/// Shared handle cloned into every listener.
#[derive(Clone)]
pub struct Runtime {
    site: Rc<RefCell<Site<LocalStorage>>>,
    dom: Rc<Dom>,
    config: Rc<SiteConfig>,
    toasts: Toasts,
}

impl Runtime {
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Feed one event to the site and apply what it asks for.
    pub fn dispatch(&self, event: UiEvent) {
        let commands = self.site.borrow_mut().handle(event);
        self.apply(commands);
    }

    fn apply(&self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Menu(transition) => self.apply_menu(transition),
                Command::ApplyTabs(view) => self.dom.apply_tabs(&view),
                Command::ReplaceFragment(fragment) => self.dom.replace_fragment(&fragment),
                Command::Navigate(url) => self.dom.navigate(&url),
                Command::FocusTabButton(index) => self.dom.focus_tab_button(index),
                Command::SetCartBadge(text) => self.dom.set_cart_badge(&text),
                Command::Toast(message) => self.toasts.show(&message),
            }
        }
    }

    fn apply_menu(&self, transition: MenuTransition) {
        let MenuTransition { animate, effects, finish } = transition;
        if animate {
            let dom = Rc::clone(&self.dom);
            motion::run_in_view_transition(self.dom.document(), move || dom.apply_menu(&effects));
        } else {
            self.dom.apply_menu(&effects);
        }

        if let Some(ScheduledFinish { ticket, delay_ms }) = finish {
            let runtime = self.clone();
            Timeout::new(delay_ms, move || runtime.dispatch(UiEvent::MenuCloseElapsed { ticket })).forget();
        }
    }
}

/// Read the optional inline config block; a malformed one is logged and
/// replaced by defaults.
fn read_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        }
    }
}

/// Look up the page, boot the site, and wire every listener.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        log::error!("no window; page left unenhanced");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("no document; page left unenhanced");
        return;
    };

    let config = read_config(&document);
    let motion = motion::detect(&window, &document);
    log::debug!("motion strategy {motion:?}");

    let store = match LocalStorage::open() {
        Ok(store) => store,
        Err(err) => {
            log::warn!("{err}; state will not persist");
            LocalStorage::detached()
        }
    };
    let dom = Rc::new(Dom::lookup(document));
    let mut site = Site::new(config.clone(), store, motion, dom.layout());
    let fragment = window.location().hash().unwrap_or_default();
    let initial = site.boot(&fragment);

    let toasts = Toasts::mount(motion, config.toast_hold_ms, config.toast_exit_ms);
    let runtime = Runtime { site: Rc::new(RefCell::new(site)), dom, config: Rc::new(config), toasts };
    runtime.apply(initial);

    wiring::wire(&runtime);
    globals::install(&runtime);
    navbar::spawn_load(runtime.config());
}
