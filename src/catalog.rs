//! Static product variant table: colour options and image angles.
//!
//! Product pages build their gallery from this table; it is also published
//! to other scripts as a read-only global.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub key: &'static str,
    pub label: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    #[serde(skip)]
    pub product: &'static str,
    pub alt: &'static str,
    pub colors: &'static [ColorOption],
    /// Image file stems, in gallery order.
    pub angles: &'static [&'static str],
}

const BLACK: ColorOption = ColorOption { key: "preto", label: "Preto", hex: "#111111" };

pub const VARIANTS: &[Variant] = &[
    Variant {
        product: "Caixa de Som",
        alt: "Caixa de Som HMASTON",
        colors: &[
            ColorOption { key: "Branco", label: "Branco", hex: "#EDEDED" },
            ColorOption { key: "Verde", label: "Verde", hex: "#18a324" },
        ],
        angles: &["1", "2", "3"],
    },
    Variant { product: "headset", alt: "Headset", colors: &[BLACK], angles: &["frente", "lado"] },
    Variant { product: "smartwatch", alt: "Smartwatch", colors: &[BLACK], angles: &["1", "2", "3", "4", "5"] },
];

/// Look up a product's variant entry by its exact key.
#[must_use]
pub fn variant(product: &str) -> Option<&'static Variant> {
    VARIANTS.iter().find(|v| v.product == product)
}

impl Variant {
    #[must_use]
    pub fn color(&self, key: &str) -> Option<&'static ColorOption> {
        let colors: &'static [ColorOption] = self.colors;
        colors.iter().find(|c| c.key == key)
    }

    /// Image paths for one colour, `<root>/<product>/<color>/<angle>.jpg`,
    /// in angle order. Unknown colours give no paths.
    #[must_use]
    pub fn image_paths(&self, image_root: &str, color_key: &str) -> Vec<String> {
        let Some(color) = self.color(color_key) else {
            return Vec::new();
        };
        let root = image_root.trim_end_matches('/');
        self.angles
            .iter()
            .map(|angle| format!("{root}/{}/{}/{angle}.jpg", self.product, color.key))
            .collect()
    }
}

/// The whole table keyed by product name.
pub struct VariantTable;

impl Serialize for VariantTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VARIANTS.len()))?;
        for v in VARIANTS {
            map.serialize_entry(v.product, v)?;
        }
        map.end()
    }
}

/// JSON object of every variant keyed by product name.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn catalog_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&VariantTable)
}
