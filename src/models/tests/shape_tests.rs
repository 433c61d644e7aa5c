use super::*;

#[test]
fn test_infer_linear_from_batten() {
    assert_eq!(infer_shape("38w linear batten"), Some(Shape::Linear));
}

#[test]
fn test_multi_word_keywords_outweigh_single_words() {
    // "high bay" (2 words) + "highbay"-style hits must beat a single "light"
    // hit elsewhere; "warehouse light" also contributes 2.
    assert_eq!(infer_shape("warehouse light high bay"), Some(Shape::HighBay));
}

#[test]
fn test_tie_breaks_toward_earlier_table_entry() {
    // "spot" is a keyword of both Round and Spot with equal word count;
    // Round comes first in the table.
    assert_eq!(infer_shape("spot"), Some(Shape::Round));
}

#[test]
fn test_no_keyword_means_unset() {
    assert_eq!(infer_shape("mystery luminaire"), None);
}

#[test]
fn test_compatibility_table() {
    assert_eq!(
        compatible_shapes(Shape::Round),
        &[Shape::Cylinder, Shape::Adjustable]
    );
    assert_eq!(compatible_shapes(Shape::Linear), &[Shape::Rectangular]);
    assert!(compatible_shapes(Shape::Flood).is_empty());
}

#[test]
fn test_seed_compatibility_excludes_rectangular_entry() {
    // Rectangular's compatibility exists only for scoring, not for widening
    // the candidate seed.
    assert!(seed_compatible_shapes(Shape::Rectangular).is_empty());
    assert_eq!(
        seed_compatible_shapes(Shape::Spot),
        &[Shape::Adjustable, Shape::Track]
    );
}
