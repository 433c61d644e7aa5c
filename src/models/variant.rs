//! Catalog variant record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ip::IpRating;
use crate::models::shape::Shape;

/// A purchasable product variant from the catalog.
///
/// Loaded once at catalog build time and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub row_id: u32,
    pub category: String,
    pub product_type: String,
    pub sku: String,
    pub price: f64,

    // Technical specs (absent means "not stated", never zero)
    #[serde(default)]
    pub power_w: Option<f64>,
    #[serde(default)]
    pub power_w_per_m: Option<f64>,
    #[serde(default)]
    pub lumen: Option<f64>,
    #[serde(default)]
    pub ip_rating: Option<IpRating>,

    // Dimensions
    #[serde(default)]
    pub length_mm: Option<f64>,
    #[serde(default)]
    pub width_mm: Option<f64>,
    #[serde(default)]
    pub height_mm: Option<f64>,
    #[serde(default)]
    pub diameter_mm: Option<f64>,

    // Features
    #[serde(default)]
    pub dimming: String,
    #[serde(default)]
    pub cct_k: Option<f64>,
    #[serde(default)]
    pub beam_deg: Option<f64>,

    // Derived at load time
    pub shape: Shape,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub is_dali: bool,

    /// Free-text field used by the relevance fallback search.
    #[serde(default)]
    pub search_text: String,

    /// Raw source fields, kept for reference output.
    #[serde(default)]
    pub raw_fields: BTreeMap<String, String>,
}

impl Variant {
    /// Lumens per watt; a quality proxy independent of the requirement.
    pub fn efficacy(&self) -> Option<f64> {
        match (self.lumen, self.power_w) {
            (Some(lumen), Some(power)) if power > 0.0 => Some(lumen / power),
            _ => None,
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.category.clone()];
        if let Some(power) = self.power_w {
            parts.push(format!("{power}W"));
        }
        if let Some(ip) = &self.ip_rating {
            parts.push(ip.to_string());
        }
        parts.join(" | ")
    }
}

#[cfg(test)]
#[path = "tests/variant_tests.rs"]
mod tests;
