//! Shared fixtures for unit tests.

use crate::catalog::Catalog;
use crate::models::ip::IpRating;
use crate::models::shape::Shape;
use crate::models::variant::Variant;

/// A minimal variant with sensible defaults; tests override what they probe.
pub fn variant(row_id: u32, sku: &str, shape: Shape) -> Variant {
    Variant {
        row_id,
        category: "LED LIGHT".to_string(),
        product_type: String::new(),
        sku: sku.to_string(),
        price: 50.0,
        power_w: None,
        power_w_per_m: None,
        lumen: None,
        ip_rating: None,
        length_mm: None,
        width_mm: None,
        height_mm: None,
        diameter_mm: None,
        dimming: String::new(),
        cct_k: None,
        beam_deg: None,
        shape,
        is_emergency: false,
        is_dali: false,
        search_text: String::new(),
        raw_fields: Default::default(),
    }
}

pub fn variant_with_specs(
    row_id: u32,
    sku: &str,
    shape: Shape,
    ip: Option<(u8, u8)>,
    power_w: Option<f64>,
    lumen: Option<f64>,
) -> Variant {
    let mut variant = variant(row_id, sku, shape);
    variant.ip_rating = ip.map(|(solid, liquid)| IpRating::new(solid, liquid));
    variant.power_w = power_w;
    variant.lumen = lumen;
    variant
}

/// A small mixed catalog: indoor rounds, damp/wet-rated rounds, linear
/// battens, and an outdoor flood.
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        variant_with_specs(1, "DL-20-20", Shape::Round, Some((2, 0)), Some(20.0), Some(2000.0)),
        variant_with_specs(2, "DL-20-44", Shape::Round, Some((4, 4)), Some(20.0), Some(2000.0)),
        variant_with_specs(3, "DL-20-65", Shape::Round, Some((6, 5)), Some(20.0), Some(2200.0)),
        variant_with_specs(4, "BAT-38-20", Shape::Linear, Some((2, 0)), Some(38.0), Some(4100.0)),
        variant_with_specs(5, "BAT-38-65", Shape::Linear, Some((6, 5)), Some(38.0), Some(4100.0)),
        variant_with_specs(6, "FL-50-66", Shape::Flood, Some((6, 6)), Some(50.0), Some(5500.0)),
    ])
}
