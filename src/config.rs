//! Site configuration with compiled defaults.
//!
//! Pages may override any field through an inline JSON block; every field
//! is optional and falls back to the values below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 800.0;
pub const DEFAULT_MENU_CLOSE_DELAY_MS: u32 = 300;
pub const DEFAULT_TOAST_HOLD_MS: u32 = 1500;
pub const DEFAULT_TOAST_EXIT_MS: u32 = 220;
pub const DEFAULT_ANCHOR_SCROLL_DELAY_MS: u32 = 180;
pub const DEFAULT_NAVBAR_PATH: &str = "navbar.html";
pub const DEFAULT_ACCOUNT_PAGE: &str = "conta.html";
pub const DEFAULT_ACTIVE_TAB_KEY: &str = "accountActiveTab";
pub const DEFAULT_CART_COUNT_KEY: &str = "cartCount";
pub const DEFAULT_IMAGE_ROOT: &str = "img";
pub const DEFAULT_SAVE_MESSAGE: &str = "Alterações salvas com sucesso!";
pub const DEFAULT_CART_MESSAGE: &str = "Item adicionado ao carrinho";

/// Element id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "shopfront-config";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Viewport width (CSS px, inclusive) at or below which panel clicks close the menu.
    pub narrow_breakpoint_px: f64,
    pub menu_close_delay_ms: u32,
    pub toast_hold_ms: u32,
    pub toast_exit_ms: u32,
    pub anchor_scroll_delay_ms: u32,
    pub navbar_path: String,
    /// Page hosting the tab panels; go-to-tab links elsewhere navigate here.
    pub account_page: String,
    pub active_tab_key: String,
    pub cart_count_key: String,
    pub image_root: String,
    pub save_message: String,
    pub cart_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
            menu_close_delay_ms: DEFAULT_MENU_CLOSE_DELAY_MS,
            toast_hold_ms: DEFAULT_TOAST_HOLD_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            anchor_scroll_delay_ms: DEFAULT_ANCHOR_SCROLL_DELAY_MS,
            navbar_path: DEFAULT_NAVBAR_PATH.to_owned(),
            account_page: DEFAULT_ACCOUNT_PAGE.to_owned(),
            active_tab_key: DEFAULT_ACTIVE_TAB_KEY.to_owned(),
            cart_count_key: DEFAULT_CART_COUNT_KEY.to_owned(),
            image_root: DEFAULT_IMAGE_ROOT.to_owned(),
            save_message: DEFAULT_SAVE_MESSAGE.to_owned(),
            cart_message: DEFAULT_CART_MESSAGE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value is unusable.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether a viewport of `width_px` counts as narrow.
    #[must_use]
    pub fn is_narrow(&self, width_px: f64) -> bool {
        width_px <= self.narrow_breakpoint_px
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.narrow_breakpoint_px.is_finite() || self.narrow_breakpoint_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "narrowBreakpointPx must be a positive number, got {}",
                self.narrow_breakpoint_px
            )));
        }
        for (name, value) in [
            ("navbarPath", &self.navbar_path),
            ("accountPage", &self.account_page),
            ("activeTabKey", &self.active_tab_key),
            ("cartCountKey", &self.cart_count_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        if self.active_tab_key == self.cart_count_key {
            return Err(ConfigError::Invalid("activeTabKey and cartCountKey must differ".to_owned()));
        }
        Ok(())
    }
}
