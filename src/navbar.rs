//! The injected shared navbar: its simple menu toggle and link handling.
//!
//! The navbar fragment carries its own trigger, panel and overlay and is
//! wired independently of [`crate::menu`]: no focus management and no
//! delayed close, just a flag mirrored onto the markup.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Visible state of the navbar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarView {
    pub panel_open: bool,
    pub overlay_active: bool,
    pub aria_expanded: &'static str,
    /// Value for `body.style.overflow`; empty clears the override.
    pub body_overflow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarMenu {
    open: bool,
}

impl NavbarMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Open or close explicitly, or flip when `show` is `None`.
    pub fn set(&mut self, show: Option<bool>) -> NavbarView {
        self.open = show.unwrap_or(!self.open);
        self.view()
    }

    #[must_use]
    pub fn view(self) -> NavbarView {
        NavbarView {
            panel_open: self.open,
            overlay_active: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
            body_overflow: if self.open { "hidden" } else { "" },
        }
    }
}

/// How a click on a navbar link is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    /// `#id` link: suppress the jump and smooth-scroll to `id` if it exists.
    /// `None` for a bare `#`.
    SamePageAnchor(Option<String>),
    /// Any other link: let the browser navigate.
    Navigate,
}

#[must_use]
pub fn classify_link(href: &str) -> NavLink {
    let Some(id) = href.trim().strip_prefix('#') else {
        return NavLink::Navigate;
    };
    if id.is_empty() {
        return NavLink::SamePageAnchor(None);
    }
    let id = match urlencoding::decode(id) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => id.to_owned(),
    };
    NavLink::SamePageAnchor(Some(id))
}
