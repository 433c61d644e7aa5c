//! Shape derivation for catalog variants.
//!
//! Priority: explicit product-type table, then category heuristics, then the
//! same scored keyword inference the BOQ extractor uses.

use crate::models::shape::{infer_shape, Shape};
use crate::text;

/// Product-type to shape table. The most reliable signal when present.
const TYPE_SHAPES: &[(&str, Shape)] = &[
    ("downlight", Shape::Round),
    ("led_linear", Shape::Linear),
    ("linear_light", Shape::Linear),
    ("panel_light", Shape::Square),
    ("street_light", Shape::Street),
    ("flood_light", Shape::Flood),
    ("high_bay", Shape::HighBay),
    ("track_light", Shape::Track),
    ("led_spot", Shape::Spot),
    ("led_wall", Shape::Wall),
    ("led_cylinder", Shape::Cylinder),
    ("exit_light", Shape::Exit),
    ("led_tube", Shape::Linear),
    ("spike_light", Shape::Spot),
    ("canopy_light", Shape::Flood),
    ("strip_light", Shape::Linear),
];

/// Size tokens that turn a square-mapped panel into a rectangular one.
const LARGE_PANEL_TOKENS: &[&str] = &["60120", "1200"];

fn is_large_panel(combined: &str) -> bool {
    LARGE_PANEL_TOKENS.iter().any(|token| combined.contains(token))
}

/// Derive the shape of one variant from its descriptive fields.
pub fn infer_variant_shape(
    category: &str,
    product_type: &str,
    sku: &str,
    search_text: &str,
) -> Shape {
    let combined = text::normalize(&format!("{category} {product_type} {sku} {search_text}"));

    let type_lower = product_type.to_lowercase();
    if let Some((_, shape)) = TYPE_SHAPES.iter().find(|(name, _)| *name == type_lower) {
        if *shape == Shape::Square && is_large_panel(&combined) {
            return Shape::Rectangular;
        }
        return *shape;
    }

    let category_lower = category.to_lowercase();
    if category_lower.contains("linear")
        || category_lower.contains("batten")
        || category_lower.contains("tube")
    {
        return Shape::Linear;
    }
    if category_lower.contains("down") {
        return Shape::Round;
    }
    if category_lower.contains("panel") {
        if is_large_panel(&combined) {
            return Shape::Rectangular;
        }
        return Shape::Square;
    }
    if category_lower.contains("street") {
        return Shape::Street;
    }
    if category_lower.contains("flood") {
        return Shape::Flood;
    }
    if category_lower.contains("track") {
        return Shape::Track;
    }
    if category_lower.contains("spot") {
        return Shape::Spot;
    }
    if category_lower.contains("high bay") || category_lower.contains("highbay") {
        return Shape::HighBay;
    }

    infer_shape(&combined).unwrap_or(Shape::Unknown)
}

#[cfg(test)]
#[path = "tests/shape_infer_tests.rs"]
mod tests;
