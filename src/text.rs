//! Text normalization for free-text descriptions and catalog search fields.

use deunicode::deunicode;

/// Normalize text for keyword/substring matching.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters to Latin via deunicode
/// 2. Lowercase
///
/// Keyword tables are ASCII, so for ASCII input this is plain lowercasing;
/// transliteration keeps vendor text with stray unicode matchable.
pub fn normalize(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Split a query into normalized whitespace-separated terms.
pub fn query_terms(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_ascii() {
        assert_eq!(normalize("38W Linear BATTEN"), "38w linear batten");
    }

    #[test]
    fn test_normalize_transliterates() {
        assert_eq!(normalize("Éclairage"), "eclairage");
    }

    #[test]
    fn test_query_terms_splits_whitespace() {
        assert_eq!(
            query_terms("LED  Panel 600x600"),
            vec!["led", "panel", "600x600"]
        );
    }
}
