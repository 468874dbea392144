use serde_json::json;

use super::*;
use crate::store::MemoryStore;

const KEY: &str = "cartCount";

// =============================================================
// coerce_number
// =============================================================

#[test]
fn coerce_number_accepts_numbers_and_numeric_strings() {
    assert_eq!(coerce_number(&json!(3)), 3.0);
    assert_eq!(coerce_number(&json!(2.5)), 2.5);
    assert_eq!(coerce_number(&json!(" 4 ")), 4.0);
}

#[test]
fn coerce_number_non_numeric_is_zero() {
    assert_eq!(coerce_number(&Value::Null), 0.0);
    assert_eq!(coerce_number(&json!("abc")), 0.0);
    assert_eq!(coerce_number(&json!("")), 0.0);
    assert_eq!(coerce_number(&json!({ "qty": 2 })), 0.0);
}

#[test]
fn coerce_number_rejects_non_finite_strings() {
    assert_eq!(coerce_number(&json!("inf")), 0.0);
    assert_eq!(coerce_number(&json!("NaN")), 0.0);
}

#[test]
fn coerce_number_booleans() {
    assert_eq!(coerce_number(&json!(true)), 1.0);
    assert_eq!(coerce_number(&json!(false)), 0.0);
}

#[test]
fn quantity_default_is_one() {
    assert_eq!(Quantity::Default.amount(), 1.0);
}

// =============================================================
// badge_text
// =============================================================

#[test]
fn badge_text_whole_numbers_have_no_fraction() {
    assert_eq!(badge_text(5.0), "5");
    assert_eq!(badge_text(0.0), "0");
}

#[test]
fn badge_text_keeps_fractions() {
    assert_eq!(badge_text(1.5), "1.5");
}

// =============================================================
// CartCounter
// =============================================================

#[test]
fn load_missing_count_is_zero() {
    let store = MemoryStore::new();
    assert_eq!(CartCounter::load(&store, KEY).badge(), "0");
}

#[test]
fn load_invalid_count_is_zero() {
    let store = MemoryStore::new().with_raw(KEY, "garbage");
    assert_eq!(CartCounter::load(&store, KEY).count(), 0.0);
}

#[test]
fn load_string_count_is_coerced() {
    let store = MemoryStore::new().with_raw(KEY, "\"7\"");
    assert_eq!(CartCounter::load(&store, KEY).count(), 7.0);
}

#[test]
fn two_additions_accumulate() {
    let store = MemoryStore::new().with_raw(KEY, "0");
    let mut cart = CartCounter::load(&store, KEY);
    cart.add(&store, &Quantity::Raw(json!(2))).expect("write");
    cart.add(&store, &Quantity::Raw(json!(3))).expect("write");
    assert_eq!(store.raw(KEY).as_deref(), Some("5"));
    assert_eq!(cart.badge(), "5");
}

#[test]
fn non_numeric_quantity_adds_nothing() {
    let store = MemoryStore::new().with_raw(KEY, "4");
    let mut cart = CartCounter::load(&store, KEY);
    cart.add(&store, &Quantity::Raw(Value::Null)).expect("write");
    cart.add(&store, &Quantity::Raw(json!("lots"))).expect("write");
    assert_eq!(cart.count(), 4.0);
    assert_eq!(store.raw(KEY).as_deref(), Some("4"));
}

#[test]
fn omitted_quantity_adds_one() {
    let store = MemoryStore::new();
    let mut cart = CartCounter::load(&store, KEY);
    assert_eq!(cart.add(&store, &Quantity::Default).expect("write"), 1.0);
}

#[test]
fn add_rereads_store_before_writing() {
    let store = MemoryStore::new();
    let mut cart = CartCounter::load(&store, KEY);
    store.set_item(KEY, "10").expect("seed");
    cart.add(&store, &Quantity::Default).expect("write");
    assert_eq!(store.raw(KEY).as_deref(), Some("11"));
}

#[test]
fn failed_write_still_advances_badge() {
    let store = MemoryStore::failing();
    let mut cart = CartCounter::load(&store, KEY);
    assert!(cart.add(&store, &Quantity::Raw(json!(2))).is_err());
    assert_eq!(cart.badge(), "2");
}
