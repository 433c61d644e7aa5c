use super::*;

use crate::engine::SubstitutionEngine;
use crate::matcher::ScoringWeights;
use crate::test_utils::fixture_catalog;

fn results() -> Vec<MatchResult> {
    let engine = SubstitutionEngine::with_catalog(fixture_catalog(), ScoringWeights::default());
    vec![
        engine
            .match_description("20W Round Downlight IP44 for bathroom", 2)
            .unwrap(),
        engine
            .match_description("38W Linear Batten for wet-room application", 2)
            .unwrap(),
    ]
}

#[test]
fn test_csv_report_has_one_row_per_item() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_results(&results(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("BOQ_Row"));
    assert_eq!(headers.get(13), Some("Alt_1_SKU"));

    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].get(2).unwrap().is_empty());
}

#[test]
fn test_json_report_structure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_results(&results(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["total_items"], 2);
    assert!(value["generated_at"].is_string());

    let first = &value["results"][0];
    assert!(first["confidence_score"].is_number());
    assert!(first["confidence_level"].is_string());
    assert!(first["score_breakdown"]["ip"]["reason"].is_string());
    assert_eq!(first["alternatives"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_extension_writes_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    write_results(&results(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("PRODUCT SUBSTITUTION REPORT"));
    assert!(text.contains("Matched SKU:"));
}
