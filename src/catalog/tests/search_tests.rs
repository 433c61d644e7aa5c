use super::*;

use crate::models::shape::Shape;
use crate::test_utils::variant;

fn catalog() -> Catalog {
    let mut downlight = variant(1, "DL-20", Shape::Round);
    downlight.category = "LED DOWN LIGHT".to_string();
    downlight.search_text = "recessed downlight round".to_string();

    let mut batten = variant(2, "BAT-38", Shape::Linear);
    batten.category = "LED BATTEN".to_string();
    batten.search_text = "linear batten surface".to_string();

    let mut flood = variant(3, "FL-50", Shape::Flood);
    flood.category = "FLOOD LIGHT".to_string();
    flood.search_text = "outdoor area flood".to_string();

    Catalog::new(vec![downlight, batten, flood])
}

#[test]
fn test_category_outweighs_search_text_and_sku() {
    let catalog = catalog();
    // "batten" hits variant 1's category (+3) and search text (+2);
    // nothing else matches.
    let hits = search_text(&catalog, "batten", 10);
    assert_eq!(hits, vec![1]);
}

#[test]
fn test_results_sorted_by_relevance() {
    let catalog = catalog();
    // "flood light" scores the flood variant highest; "light" also hits the
    // downlight's category and search text.
    let hits = search_text(&catalog, "flood light", 10);
    assert_eq!(hits, vec![2, 0]);
}

#[test]
fn test_limit_caps_results() {
    let catalog = catalog();
    let hits = search_text(&catalog, "light", 1);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_no_terms_or_no_hits() {
    let catalog = catalog();
    assert!(search_text(&catalog, "   ", 10).is_empty());
    assert!(search_text(&catalog, "chandelier", 10).is_empty());
}

#[test]
fn test_ties_keep_load_order() {
    let catalog = catalog();
    // "led" hits variants 0 and 1 identically (category only).
    let hits = search_text(&catalog, "led", 10);
    assert_eq!(hits, vec![0, 1]);
}
