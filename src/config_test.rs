use super::*;

#[test]
fn defaults_match_published_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.narrow_breakpoint_px, 800.0);
    assert_eq!(config.menu_close_delay_ms, 300);
    assert_eq!(config.toast_hold_ms, 1500);
    assert_eq!(config.toast_exit_ms, 220);
    assert_eq!(config.anchor_scroll_delay_ms, 180);
    assert_eq!(config.navbar_path, "navbar.html");
    assert_eq!(config.active_tab_key, "accountActiveTab");
    assert_eq!(config.cart_count_key, "cartCount");
}

#[test]
fn confirmation_messages_match_the_site_language() {
    let config = SiteConfig::default();
    assert_eq!(config.account_page, "conta.html");
    assert_eq!(config.save_message, "Alterações salvas com sucesso!");
    assert_eq!(config.cart_message, "Item adicionado ao carrinho");
}

#[test]
fn from_json_empty_object_is_default() {
    let config = SiteConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let config = SiteConfig::from_json(r#"{ "accountPage": "account.html", "toastHoldMs": 3000 }"#)
        .expect("config should parse");
    assert_eq!(config.account_page, "account.html");
    assert_eq!(config.toast_hold_ms, 3000);
    assert_eq!(config.toast_exit_ms, DEFAULT_TOAST_EXIT_MS);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = SiteConfig::from_json("{ nope").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = SiteConfig::from_json(r#"{ "breakpoint": 600 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_non_positive_breakpoint() {
    let err = SiteConfig::from_json(r#"{ "narrowBreakpointPx": 0 }"#).expect_err("should fail");
    assert!(err.to_string().contains("narrowBreakpointPx"));
}

#[test]
fn from_json_rejects_empty_store_key() {
    let err = SiteConfig::from_json(r#"{ "cartCountKey": "  " }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn from_json_rejects_shared_store_key() {
    let err = SiteConfig::from_json(r#"{ "cartCountKey": "accountActiveTab" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn is_narrow_is_inclusive_at_breakpoint() {
    let config = SiteConfig::default();
    assert!(config.is_narrow(800.0));
    assert!(config.is_narrow(375.0));
    assert!(!config.is_narrow(801.0));
}
