//! # shopfront
//!
//! DOM-free core of the storefront enhancement layer: navigation menu,
//! account tabs, card form actions, cart counter, toasts, the catalog
//! variant table and the navbar loader.
//!
//! The browser host (`client/`) turns DOM events into [`site::UiEvent`]s,
//! feeds them to [`site::Site`], and projects the returned
//! [`site::Command`]s back onto the page. Everything in this crate runs and
//! tests without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Single UI-state owner and event dispatch |
//! | [`menu`] | Slide-out menu state machine |
//! | [`tabs`] | Account tab resolution, projection and keyboard navigation |
//! | [`forms`] | Card reset/save classification |
//! | [`cart`] | Persisted cart counter |
//! | [`toast`] | Toast lifecycle model |
//! | [`catalog`] | Static product variant table |
//! | [`navbar`] | Injected navbar toggle and link handling |
//! | [`motion`] | Animation strategy chosen once at startup |
//! | [`store`] | Injected key-value storage capability |
//! | [`config`] | Site configuration with compiled defaults |

pub mod cart;
pub mod catalog;
pub mod config;
pub mod forms;
pub mod menu;
pub mod motion;
pub mod navbar;
pub mod site;
pub mod store;
pub mod tabs;
pub mod toast;
