//! The content document — the flat two-level mapping the website reads.
//!
//! Categories and element ids are open-ended: a write to an unknown key
//! creates it. Values are always plain strings (URLs, text, or HTML
//! fragments passed through untouched).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CAT_IMAGES: &str = "images";
pub const CAT_TITLES: &str = "titles";
pub const CAT_DESCRIPTIONS: &str = "descriptions";
pub const CAT_PRICES: &str = "prices";
pub const CAT_REVIEW_CONTENT: &str = "reviewContent";
pub const CAT_CUSTOM_CONTENT: &str = "customContent";

/// Category name -> element id -> value. BTreeMap keeps serialization
/// deterministic, so saving a just-loaded document is byte-identical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(BTreeMap<String, BTreeMap<String, String>>);

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document a fresh install starts from: the example placeholders
    /// the website ships with.
    pub fn seeded() -> Self {
        let mut doc = Self::new();
        for id in ["deal-image-1", "deal-image-2", "deal-image-3"] {
            doc.set(CAT_IMAGES, id, "");
        }
        doc.set(CAT_TITLES, "deal-title-1", "Premium Wireless Earbuds with ANC");
        doc.set(CAT_TITLES, "deal-title-2", "Fitness Smart Watch - Health Tracker");
        doc.set(CAT_TITLES, "deal-title-3", "20000mAh Fast Charging Power Bank");
        doc.set(CAT_DESCRIPTIONS, "deal-desc-1", "Active noise cancellation, 30hr battery");
        doc.set(CAT_DESCRIPTIONS, "deal-desc-2", "Heart rate monitor, sleep tracking");
        doc.set(CAT_DESCRIPTIONS, "deal-desc-3", "20W fast charging, dual USB ports");
        doc.set(CAT_PRICES, "price-1", "\u{20b9}2,499");
        doc.set(CAT_PRICES, "price-2", "\u{20b9}1,999");
        doc.set(CAT_PRICES, "price-3", "\u{20b9}899");
        doc.0.entry(CAT_REVIEW_CONTENT.into()).or_default();
        doc.0.entry(CAT_CUSTOM_CONTENT.into()).or_default();
        doc
    }

    /// Upsert: unknown categories and ids are created, existing values
    /// overwritten.
    pub fn set(&mut self, category: &str, id: &str, value: impl Into<String>) {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(id.to_string(), value.into());
    }

    pub fn get(&self, category: &str, id: &str) -> Option<&str> {
        self.0.get(category)?.get(id).map(String::as_str)
    }

    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(name)
    }

    /// All categories with their fields, in stable (sorted) order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }
}
