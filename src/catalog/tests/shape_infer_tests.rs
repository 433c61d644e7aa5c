use super::*;

#[test]
fn test_type_table_wins() {
    assert_eq!(
        infer_variant_shape("SOMETHING ODD", "downlight", "X-1", ""),
        Shape::Round
    );
    assert_eq!(
        infer_variant_shape("", "led_tube", "T8-18", ""),
        Shape::Linear
    );
}

#[test]
fn test_square_panel_becomes_rectangular_on_size_tokens() {
    assert_eq!(
        infer_variant_shape("PANEL", "panel_light", "PL-6060", "595x595 office panel"),
        Shape::Square
    );
    assert_eq!(
        infer_variant_shape("PANEL", "panel_light", "PL-60120", "600x1200 panel"),
        Shape::Rectangular
    );
}

#[test]
fn test_category_heuristics() {
    assert_eq!(
        infer_variant_shape("LED BATTEN", "", "B-1", ""),
        Shape::Linear
    );
    assert_eq!(
        infer_variant_shape("DOWN LIGHT", "", "D-1", ""),
        Shape::Round
    );
    assert_eq!(
        infer_variant_shape("PANEL LIGHT", "", "P-1", "1200 long"),
        Shape::Rectangular
    );
    assert_eq!(
        infer_variant_shape("HIGHBAY", "", "H-1", ""),
        Shape::HighBay
    );
}

#[test]
fn test_keyword_fallback_and_unknown() {
    assert_eq!(
        infer_variant_shape("ACCENT RANGE", "", "G-1", "gimbal adjustable fitting"),
        Shape::Adjustable
    );
    assert_eq!(
        infer_variant_shape("MISC", "", "M-1", "unclassifiable"),
        Shape::Unknown
    );
}
