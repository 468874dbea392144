//! Single owner of the page's UI state and the event dispatch table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser host translates DOM events into [`UiEvent`]s, calls
//! [`Site::handle`], and applies the returned [`Command`]s. Nothing here
//! touches the DOM, so every handler is exercised by plain unit tests with a
//! [`crate::store::MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Store write failures are logged and swallowed; the page keeps working
//! from in-memory state. No failure ever reaches the user.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::cart::{CartCounter, Quantity};
use crate::config::SiteConfig;
use crate::menu::{CloseOptions, CloseTicket, MenuController, MenuEffect, MenuTransition};
use crate::motion::MotionStrategy;
use crate::store::{self, KeyValueStore};
use crate::tabs::{self, GoToTab, TabController, TabKey, TabName, TabView};

/// What the host found on the page at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Trigger, panel and overlay all present.
    pub menu_present: bool,
    /// Tab panel sections present, in any order.
    pub tab_panels: Vec<TabName>,
    /// `data-tab` of every tab button, in document order.
    pub tab_buttons: Vec<String>,
}

/// A user interaction or timer, already reduced to what the core needs.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MenuTriggerClicked,
    OverlayClicked,
    /// A link or button inside the menu panel was clicked.
    PanelActionClicked { viewport_width: f64 },
    KeyDown { key: String },
    /// Focus moved to a new element.
    FocusIn { inside_panel: bool },
    MenuCloseElapsed { ticket: CloseTicket },
    TabClicked { tab: String },
    TabKeyDown { index: usize, key: TabKey },
    /// Click on (or inside) an element carrying `data-go-tab`.
    GoToTabClicked { target: String },
    HashChanged { fragment: String },
    /// A non-outline card action button was clicked.
    SaveRequested { card_id: Option<String> },
    AddToCart { quantity: Quantity },
}

/// A change the host applies to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Menu(MenuTransition),
    ApplyTabs(TabView),
    /// Replace the current history entry's fragment.
    ReplaceFragment(String),
    /// Load another page.
    Navigate(String),
    FocusTabButton(usize),
    SetCartBadge(String),
    Toast(String),
}

pub struct Site<S: KeyValueStore> {
    config: SiteConfig,
    store: S,
    menu: MenuController,
    tabs: TabController,
    cart: CartCounter,
    fragment: String,
}

impl<S: KeyValueStore> Site<S> {
    pub fn new(config: SiteConfig, store: S, motion: MotionStrategy, layout: PageLayout) -> Self {
        let menu = MenuController::new(motion, config.menu_close_delay_ms, layout.menu_present);
        let tabs = TabController::new(layout.tab_panels, layout.tab_buttons);
        let cart = CartCounter::load(&store, &config.cart_count_key);
        Self { config, store, menu, tabs, cart, fragment: String::new() }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[cfg(test)]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    #[must_use]
    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    #[cfg(test)]
    #[must_use]
    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    #[cfg(test)]
    #[must_use]
    pub fn cart(&self) -> &CartCounter {
        &self.cart
    }

    /// Render the cart badge and show the initial tab.
    ///
    /// The resolved tab is shown without persisting it.
    pub fn boot(&mut self, fragment: &str) -> Vec<Command> {
        self.fragment = fragment.to_owned();
        let stored = stored_tab(&self.store, &self.config.active_tab_key);
        let initial = tabs::resolve_initial_tab(fragment, stored.as_deref());
        log::debug!("initial tab {initial} (fragment {fragment:?}, stored {stored:?})");

        let mut commands = vec![Command::SetCartBadge(self.cart.badge())];
        commands.extend(self.activate_tab(initial.as_str(), false));
        commands
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Command> {
        match event {
            UiEvent::MenuTriggerClicked => menu_commands(self.menu.toggle()),
            UiEvent::OverlayClicked => menu_commands(self.menu.close(CloseOptions::default())),
            UiEvent::PanelActionClicked { viewport_width } => {
                if self.config.is_narrow(viewport_width) {
                    menu_commands(self.menu.close(CloseOptions::default()))
                } else {
                    Vec::new()
                }
            }
            UiEvent::KeyDown { key } => {
                if key == "Escape" && self.menu.is_open() {
                    menu_commands(self.menu.close(CloseOptions::default()))
                } else {
                    Vec::new()
                }
            }
            UiEvent::FocusIn { inside_panel } => {
                if self.menu.is_open() && !inside_panel {
                    menu_commands(MenuTransition {
                        effects: vec![MenuEffect::FocusFirstInPanel],
                        ..MenuTransition::default()
                    })
                } else {
                    Vec::new()
                }
            }
            UiEvent::MenuCloseElapsed { ticket } => menu_commands(MenuTransition {
                effects: self.menu.finish_close(ticket),
                ..MenuTransition::default()
            }),
            UiEvent::TabClicked { tab } => self.activate_tab(&tab, true),
            UiEvent::TabKeyDown { index, key } => self.move_tab_focus(index, key),
            UiEvent::GoToTabClicked { target } => {
                match tabs::go_to_tab(&target, self.tabs.has_panels(), &self.config.account_page) {
                    Some(GoToTab::Activate(tab)) => self.activate_tab(tab.as_str(), true),
                    Some(GoToTab::Navigate(url)) => vec![Command::Navigate(url)],
                    None => Vec::new(),
                }
            }
            UiEvent::HashChanged { fragment } => {
                self.fragment = fragment;
                match tabs::fragment_param(&self.fragment, tabs::TAB_PARAM).as_deref().and_then(TabName::parse) {
                    Some(tab) => self.activate_tab(tab.as_str(), true),
                    None => Vec::new(),
                }
            }
            UiEvent::SaveRequested { card_id } => {
                log::info!("save requested for card {}", card_id.as_deref().unwrap_or("(no id)"));
                vec![Command::Toast(self.config.save_message.clone())]
            }
            UiEvent::AddToCart { quantity } => {
                if let Err(err) = self.cart.add(&self.store, &quantity) {
                    log::warn!("failed to persist cart count: {err}");
                }
                vec![Command::SetCartBadge(self.cart.badge()), Command::Toast(self.config.cart_message.clone())]
            }
        }
    }

    fn activate_tab(&mut self, name: &str, persist: bool) -> Vec<Command> {
        let change = self.tabs.set_active_tab(name, persist);
        let mut commands = vec![Command::ApplyTabs(change.view)];
        let Some(tab) = change.persist else {
            return commands;
        };
        if let Err(err) = store::save_json(&self.store, &self.config.active_tab_key, tab.as_str()) {
            log::warn!("failed to persist active tab: {err}");
        }
        let fragment = tabs::tab_fragment(tab);
        if fragment != self.fragment {
            self.fragment.clone_from(&fragment);
            commands.push(Command::ReplaceFragment(fragment));
        }
        commands
    }

    /// Arrow/Home/End on a tab button: focus the target button and activate it.
    fn move_tab_focus(&mut self, index: usize, key: TabKey) -> Vec<Command> {
        let Some(next) = key.target(index, self.tabs.button_count()) else {
            return Vec::new();
        };
        let Some(tab) = self.tabs.button_tab(next).map(str::to_owned) else {
            return Vec::new();
        };
        let mut commands = vec![Command::FocusTabButton(next)];
        commands.extend(self.activate_tab(&tab, true));
        commands
    }
}

fn menu_commands(transition: MenuTransition) -> Vec<Command> {
    if transition.is_empty() { Vec::new() } else { vec![Command::Menu(transition)] }
}

/// The stored tab candidate. Non-string values that a script would treat
/// as truthy are kept as text so they fail validation instead of being
/// skipped.
fn stored_tab(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store::load_json::<serde_json::Value>(store, key)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
