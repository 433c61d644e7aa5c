//! Free-text relevance search over the catalog.
//!
//! Term-in-field scoring with fixed weights: category hits count most, then
//! the search-text field, then the SKU. Stage 3 of the candidate funnel.

use crate::catalog::Catalog;
use crate::text;

const WEIGHT_CATEGORY: i32 = 3;
const WEIGHT_SEARCH_TEXT: i32 = 2;
const WEIGHT_SKU: i32 = 1;

/// Score every variant against the query terms and return the ids of the
/// best `limit`, score descending. Ties keep catalog load order (stable
/// sort), so the result is deterministic.
pub fn search_text(catalog: &Catalog, query: &str, limit: usize) -> Vec<usize> {
    let terms = text::query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(i32, usize)> = Vec::new();
    for (id, variant) in catalog.variants().iter().enumerate() {
        let search_field = text::normalize(&variant.search_text);
        let category = text::normalize(&variant.category);
        let sku = text::normalize(&variant.sku);

        let mut score = 0;
        for term in &terms {
            if search_field.contains(term.as_str()) {
                score += WEIGHT_SEARCH_TEXT;
            }
            if category.contains(term.as_str()) {
                score += WEIGHT_CATEGORY;
            }
            if sku.contains(term.as_str()) {
                score += WEIGHT_SKU;
            }
        }

        if score > 0 {
            scored.push((score, id));
        }
    }

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, id)| id).collect()
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
