//! Account tab panels: resolution, projection and keyboard navigation.
//!
//! DESIGN
//! ======
//! The controller holds which panels and buttons exist on the page and which
//! tab is active; [`TabController::view`] derives the visible state of every
//! panel and button from that, so the host never reads state back out of
//! DOM classes.
//!
//! The URL fragment uses query-string syntax (`#tab=billing&x=y`) so other
//! parameters can share it.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use std::fmt;

/// Fragment parameter carrying the active tab.
pub const TAB_PARAM: &str = "tab";

/// One of the three account panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabName {
    #[default]
    Profile,
    Security,
    Billing,
}

impl TabName {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Security, Self::Billing];

    /// Parse an exact tab name. Unknown names, including different casing, are rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "profile" => Some(Self::Profile),
            "security" => Some(Self::Security),
            "billing" => Some(Self::Billing),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Security => "security",
            Self::Billing => "billing",
        }
    }

    /// Element id of the panel section for this tab.
    #[must_use]
    pub fn panel_id(self) -> String {
        format!("tab-{}", self.as_str())
    }
}

impl fmt::Display for TabName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the first `name` parameter out of a URL fragment.
///
/// Accepts the fragment with or without its leading `#`. Follows form
/// encoding: `+` is a space and `%XX` sequences are decoded.
#[must_use]
pub fn fragment_param(fragment: &str, name: &str) -> Option<String> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    body.split('&').filter(|pair| !pair.is_empty()).find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key) == name { Some(decode_component(value)) } else { None }
    })
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Fragment selecting `tab`, e.g. `#tab=billing`.
#[must_use]
pub fn tab_fragment(tab: TabName) -> String {
    format!("#{TAB_PARAM}={}", urlencoding::encode(tab.as_str()))
}

/// Pick the tab to show on page load.
///
/// The first non-empty candidate among the fragment's `tab` parameter, the
/// stored value and the default wins; if that candidate is not a known tab
/// the default is used. An invalid fragment value does not fall through to
/// the stored value.
#[must_use]
pub fn resolve_initial_tab(fragment: &str, stored: Option<&str>) -> TabName {
    let from_fragment = fragment_param(fragment, TAB_PARAM).filter(|tab| !tab.is_empty());
    let candidate = from_fragment
        .as_deref()
        .or_else(|| stored.filter(|tab| !tab.is_empty()));
    candidate.and_then(TabName::parse).unwrap_or_default()
}

/// Visible state of one tab panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub tab: TabName,
    pub hidden: bool,
}

/// Visible state of one tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// The button's `data-tab` value, verbatim.
    pub tab: String,
    pub selected: bool,
    pub tab_index: i32,
}

/// Projection of the controller onto every panel and button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabView {
    pub panels: Vec<PanelView>,
    pub buttons: Vec<ButtonView>,
}

impl TabView {
    #[cfg(test)]
    #[must_use]
    pub fn visible_panels(&self) -> Vec<TabName> {
        self.panels.iter().filter(|p| !p.hidden).map(|p| p.tab).collect()
    }

    #[cfg(test)]
    #[must_use]
    pub fn selected_buttons(&self) -> Vec<&str> {
        self.buttons.iter().filter(|b| b.selected).map(|b| b.tab.as_str()).collect()
    }
}

/// Result of [`TabController::set_active_tab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    pub view: TabView,
    /// Tab to write to the store and the fragment, when persisting.
    pub persist: Option<TabName>,
}

/// Owner of the active-tab state for one page.
#[derive(Debug, Clone, Default)]
pub struct TabController {
    panels: Vec<TabName>,
    buttons: Vec<String>,
    active: Option<String>,
}

impl TabController {
    /// `panels` lists the panel sections present on the page; `buttons` the
    /// `data-tab` value of every tab button, in document order.
    #[must_use]
    pub fn new(panels: Vec<TabName>, buttons: Vec<String>) -> Self {
        Self { panels, buttons, active: None }
    }

    /// Whether any tab panel exists, i.e. this is the account page.
    #[must_use]
    pub fn has_panels(&self) -> bool {
        !self.panels.is_empty()
    }

    #[must_use]
    pub fn active(&self) -> Option<TabName> {
        self.active.as_deref().and_then(TabName::parse)
    }

    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn button_tab(&self, index: usize) -> Option<&str> {
        self.buttons.get(index).map(String::as_str)
    }

    /// Make `name` the active tab.
    ///
    /// Every panel is hidden except the one named `name`; a name without a
    /// panel leaves all panels hidden. Buttons are selected by exact
    /// `data-tab` match.
    pub fn set_active_tab(&mut self, name: &str, persist: bool) -> TabChange {
        self.active = Some(name.to_owned());
        log::debug!("active tab -> {name} (persist: {persist})");
        TabChange { view: self.view(), persist: if persist { TabName::parse(name) } else { None } }
    }

    /// Project the current state onto panels and buttons.
    #[must_use]
    pub fn view(&self) -> TabView {
        let active = self.active.as_deref();
        let panels = self
            .panels
            .iter()
            .map(|&tab| PanelView { tab, hidden: active != Some(tab.as_str()) })
            .collect();
        let buttons = self
            .buttons
            .iter()
            .map(|tab| {
                let selected = active == Some(tab.as_str());
                ButtonView { tab: tab.clone(), selected, tab_index: if selected { 0 } else { -1 } }
            })
            .collect();
        TabView { panels, buttons }
    }
}

/// Keys that move focus between tab buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl TabKey {
    /// Parse a `KeyboardEvent.key` value.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Index of the button to move to from `index` among `len` buttons.
    /// Arrows wrap around.
    #[must_use]
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 || index >= len {
            return None;
        }
        Some(match self {
            Self::ArrowRight => (index + 1) % len,
            Self::ArrowLeft => (index + len - 1) % len,
            Self::Home => 0,
            Self::End => len - 1,
        })
    }
}

/// What a `[data-go-tab]` click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoToTab {
    /// Panels are on this page: switch in place.
    Activate(TabName),
    /// Load the account page with the tab in its fragment.
    Navigate(String),
}

/// Decide the outcome of a click on an element carrying `data-go-tab="raw"`.
#[must_use]
pub fn go_to_tab(raw: &str, on_account_page: bool, account_page: &str) -> Option<GoToTab> {
    let tab = TabName::parse(raw.trim())?;
    if on_account_page {
        Some(GoToTab::Activate(tab))
    } else {
        Some(GoToTab::Navigate(format!("{account_page}{}", tab_fragment(tab))))
    }
}
