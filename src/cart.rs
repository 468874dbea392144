//! Persisted aggregate cart counter.
//!
//! One number in the store, shown in a badge. Additions accept loosely
//! typed quantities from other pages' scripts and coerce them the way a
//! script's `Number(x) || 0` would.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde_json::Value;

use crate::store::{self, KeyValueStore, StoreError};

/// Quantity argument of an add-to-cart call.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    /// No argument given: add one item.
    Default,
    /// Whatever the caller passed, coerced with [`coerce_number`].
    Raw(Value),
}

impl Quantity {
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            Self::Default => 1.0,
            Self::Raw(value) => coerce_number(value),
        }
    }
}

/// Coerce a JSON value to a finite number, using 0 for anything non-numeric.
///
/// Numeric strings (surrounding whitespace allowed) are parsed; empty or
/// non-numeric strings, `null`, arrays and objects give 0; booleans give 1 or 0.
#[must_use]
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Badge text for `count`; whole numbers print without a fractional part.
#[must_use]
pub fn badge_text(count: f64) -> String {
    if count.fract() == 0.0 && count.abs() < 1e15 {
        format!("{count:.0}")
    } else {
        count.to_string()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn count_value(count: f64) -> Value {
    if count.fract() == 0.0 && count.abs() < 1e15 {
        Value::from(count as i64)
    } else {
        serde_json::Number::from_f64(count).map_or(Value::Null, Value::Number)
    }
}

/// The cart count and the store key it lives under.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCounter {
    key: String,
    count: f64,
}

impl CartCounter {
    /// Read the persisted count; absent or invalid values give 0.
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        let stored = store::load_or(store, key, Value::Null);
        Self { key: key.to_owned(), count: coerce_number(&stored) }
    }

    #[must_use]
    pub fn count(&self) -> f64 {
        self.count
    }

    #[must_use]
    pub fn badge(&self) -> String {
        badge_text(self.count)
    }

    /// Add `quantity` to the persisted count and write the total back.
    ///
    /// The in-memory count advances even when the write fails, so the
    /// badge stays consistent for the rest of the page's life.
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails.
    pub fn add(&mut self, store: &impl KeyValueStore, quantity: &Quantity) -> Result<f64, StoreError> {
        // Re-read so additions from other tabs are not overwritten.
        let current = coerce_number(&store::load_or(store, &self.key, Value::Null));
        self.count = current + quantity.amount();
        log::debug!("cart count {current} -> {}", self.count);
        store::save_json(store, &self.key, &count_value(self.count))?;
        Ok(self.count)
    }
}
