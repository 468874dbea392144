//! The DOM contract: ids, classes and attributes the host expects in the
//! page markup, plus the `window` globals other pages' scripts call.

pub const MENU_TRIGGER_ID: &str = "menuBtn";
pub const MENU_PANEL_ID: &str = "mainNav";
pub const MENU_OVERLAY_ID: &str = "navOverlay";
pub const CART_BADGE_ID: &str = "cartCounter";

/// Class toggled on the panel while the menu is open.
pub const PANEL_OPEN_CLASS: &str = "show-menu";
/// Class toggled on the overlay while the menu is open.
pub const OVERLAY_ACTIVE_CLASS: &str = "active";

/// First focusable element inside the panel.
pub const FOCUSABLE: &str = "a, button, [tabindex]:not([tabindex=\"-1\"])";
/// Clicks on these inside the panel may close the menu.
pub const PANEL_ACTIONS: &str = "a, button";

pub const TAB_BUTTON: &str = ".tab-btn";
pub const TAB_DATA_ATTR: &str = "data-tab";
/// Class marking the selected tab button.
pub const TAB_ACTIVE_CLASS: &str = "active";
pub const GO_TO_TAB: &str = "[data-go-tab]";
pub const GO_TO_TAB_ATTR: &str = "data-go-tab";

/// Card action buttons handled by the form module.
pub const FORM_ACTIONS: &str = "#tab-profile .btn, #tab-security .btn";
pub const CARD: &str = ".card";
pub const CARD_FIELDS: &str = "input, textarea, select";

/// Links inside the injected navbar.
pub const NAVBAR_LINKS: &str = "a";

pub const ADD_TO_CART_GLOBAL: &str = "addToCart";
pub const IMAGE_PATHS_GLOBAL: &str = "shopfrontImagePaths";
/// Catalog table read by the product pages.
pub const VARIANTS_GLOBAL: &str = "EBENEZER_VARIANTS";
/// Second name for the same frozen table.
pub const VARIANTS_ALIAS_GLOBAL: &str = "SHOPFRONT_VARIANTS";
