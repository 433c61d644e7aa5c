use super::*;

use crate::models::environment::Environment;
use crate::models::shape::Shape;
use crate::test_utils::{variant, variant_with_specs};

fn scorer() -> Scorer {
    Scorer::new(ScoringWeights::default())
}

fn item(description: &str) -> BoqItem {
    let mut session = crate::boq::session::ParseSession::new();
    session.parse_description(description).unwrap()
}

#[test]
fn test_exact_variant_scores_very_high() {
    let item = item("20W Round Downlight IP44 2000lm for bathroom");
    let variant = variant_with_specs(1, "DL-20-44", Shape::Round, Some((4, 4)), Some(20.0), Some(2000.0));

    let (confidence, breakdown) = scorer().score_match(&item, &variant);

    assert!(confidence >= 0.95, "confidence was {confidence}");
    assert!(breakdown.ip.reason.contains("Exact IP match"));
    assert!(breakdown.shape.reason.contains("Exact"));
    assert!(breakdown.wattage.reason.contains("Exact wattage"));
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let scorer = scorer();
    let items = [
        item("20W Round Downlight IP44"),
        item("underwater fountain light IP68 with emergency DALI dimmable"),
        item("plain fitting"),
    ];
    let variants = [
        variant(1, "A-1", Shape::Unknown),
        variant_with_specs(2, "A-2", Shape::Flood, Some((6, 6)), Some(500.0), Some(100.0)),
        variant_with_specs(3, "A-3", Shape::Round, Some((2, 0)), Some(20.0), Some(3000.0)),
    ];

    for item in &items {
        for variant in &variants {
            let (confidence, _) = scorer.score_match(item, variant);
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}

#[test]
fn test_ip_sufficient_variant_beats_insufficient_twin() {
    let scorer = scorer();
    let item = item("Outdoor light IP65");

    let low = variant_with_specs(1, "T-20", Shape::Round, Some((2, 0)), None, None);
    let high = variant_with_specs(2, "T-65", Shape::Round, Some((6, 5)), None, None);

    let (score_low, _) = scorer.score_match(&item, &low);
    let (score_high, _) = scorer.score_match(&item, &high);

    assert!(score_high > score_low);
}

#[test]
fn test_ip_penalty_tiers_use_combined_gap() {
    let scorer = scorer();
    let item = item("wet area fitting IP65");

    // Gap 45: IP65 required vs IP20.
    let ip20 = variant_with_specs(1, "A", Shape::Unknown, Some((2, 0)), None, None);
    let (_, breakdown) = scorer.score_match(&item, &ip20);
    assert!((breakdown.ip.score - 3.5).abs() < 1e-4);
    assert!(breakdown.ip.reason.starts_with("CRITICAL"));

    // Gap 25: IP65 vs IP40.
    let ip40 = variant_with_specs(2, "B", Shape::Unknown, Some((4, 0)), None, None);
    let (_, breakdown) = scorer.score_match(&item, &ip40);
    assert!((breakdown.ip.score - 10.5).abs() < 1e-4);
    assert!(breakdown.ip.reason.starts_with("WARNING"));

    // Gap 1: IP65 vs IP64.
    let ip64 = variant_with_specs(3, "C", Shape::Unknown, Some((6, 4)), None, None);
    let (_, breakdown) = scorer.score_match(&item, &ip64);
    assert!((breakdown.ip.score - 21.0).abs() < 1e-4);
    assert!(breakdown.ip.reason.contains("slightly below"));
}

#[test]
fn test_missing_variant_ip_treated_as_lowest() {
    let scorer = scorer();
    let item = item("wet room light IP65");
    let unrated = variant(1, "U-1", Shape::Unknown);

    let (_, breakdown) = scorer.score_match(&item, &unrated);
    assert!(breakdown.ip.reason.contains("IP20"));
    assert!(breakdown.ip.reason.starts_with("CRITICAL"));
}

#[test]
fn test_shape_scoring_tiers() {
    let scorer = scorer();
    let item = item("Round downlight");

    let exact = variant(1, "A", Shape::Round);
    let compatible = variant(2, "B", Shape::Cylinder);
    let mismatch = variant(3, "C", Shape::Flood);

    assert_eq!(scorer.score_match(&item, &exact).1.shape.score, 25.0);
    assert!((scorer.score_match(&item, &compatible).1.shape.score - 17.5).abs() < 1e-4);
    assert!((scorer.score_match(&item, &mismatch).1.shape.score - 5.0).abs() < 1e-4);

    let unset = item_without_shape();
    assert!((scorer.score_match(&unset, &exact).1.shape.score - 17.5).abs() < 1e-4);
}

fn item_without_shape() -> BoqItem {
    let mut item = item("plain fitting");
    assert!(item.requested_shape.is_none());
    item.environment = Environment::DryIndoor;
    item
}

#[test]
fn test_wattage_tolerance_tiers() {
    let scorer = scorer();
    let item = item("100W flood");

    let cases = [
        (100.0, 15.0),  // exact
        (108.0, 14.25), // within 10%
        (118.0, 12.75), // within 20%
        (128.0, 9.0),   // within 30%
        (150.0, 4.5),   // beyond
    ];
    for (power, expected) in cases {
        let variant = variant_with_specs(1, "W", Shape::Flood, None, Some(power), None);
        let score = scorer.score_match(&item, &variant).1.wattage.score;
        assert!(
            (score - expected).abs() < 1e-4,
            "power {power}: score {score}, expected {expected}"
        );
    }

    let unknown = variant(2, "X", Shape::Flood);
    assert!((scorer.score_match(&item, &unknown).1.wattage.score - 4.5).abs() < 1e-4);
}

#[test]
fn test_lumen_band_prefers_slightly_higher() {
    let scorer = scorer();
    let item = item("fitting 2000lm");

    let higher = variant_with_specs(1, "H", Shape::Unknown, None, None, Some(2300.0));
    let lower = variant_with_specs(2, "L", Shape::Unknown, None, None, Some(1750.0));

    // +15% gets the 5%-of-weight bonus, -12.5% does not.
    let score_higher = scorer.score_match(&item, &higher).1.lumens.score;
    let score_lower = scorer.score_match(&item, &lower).1.lumens.score;
    assert!((score_higher - 9.5).abs() < 1e-4);
    assert!((score_lower - 9.0).abs() < 1e-4);
}

#[test]
fn test_lumens_derived_from_wattage_when_unstated() {
    let scorer = scorer();
    let item = item("20W downlight");
    assert!(item.requested_lumens.is_none());

    // Expectation is 2000 lm; 2000 lm matches exactly.
    let variant = variant_with_specs(1, "D", Shape::Round, None, Some(20.0), Some(2000.0));
    let breakdown = scorer.score_match(&item, &variant).1;
    assert_eq!(breakdown.lumens.score, 10.0);
    assert!(breakdown.lumens.reason.contains("matches"));
}

#[test]
fn test_efficacy_bonus_tiers() {
    let scorer = scorer();
    let item = item("plain fitting");

    let cases = [
        (1400.0, 5.0), // 140 lm/W
        (1150.0, 4.0), // 115 lm/W
        (950.0, 2.5),  // 95 lm/W
        (750.0, 1.0),  // 75 lm/W
        (500.0, 0.0),  // 50 lm/W
    ];
    for (lumen, expected) in cases {
        let variant = variant_with_specs(1, "E", Shape::Unknown, None, Some(10.0), Some(lumen));
        let score = scorer.score_match(&item, &variant).1.efficacy.score;
        assert!(
            (score - expected).abs() < 1e-4,
            "lumen {lumen}: score {score}, expected {expected}"
        );
    }

    let unknown = variant(2, "E2", Shape::Unknown);
    assert_eq!(scorer.score_match(&item, &unknown).1.efficacy.score, 0.0);
}

#[test]
fn test_feature_scoring_and_denominator() {
    let scorer = scorer();
    let item = item("20W downlight with emergency DALI dimmable");
    assert!(item.requires_emergency && item.requires_dali && item.requires_dimming);

    let mut satisfied = variant_with_specs(1, "F", Shape::Round, None, Some(20.0), Some(2000.0));
    satisfied.is_emergency = true;
    satisfied.is_dali = true;

    let (_, breakdown) = scorer.score_match(&item, &satisfied);
    // 5 + 3 + 2; dimming satisfied through DALI capability.
    assert_eq!(breakdown.features.score, 10.0);
    assert!(!breakdown.features.reason.contains("WARNING"));

    let unsatisfied = variant_with_specs(2, "G", Shape::Round, None, Some(20.0), Some(2000.0));
    let (_, breakdown) = scorer.score_match(&item, &unsatisfied);
    assert_eq!(breakdown.features.score, 0.0);
    assert!(breakdown.features.reason.contains("Emergency required but not available"));
    assert!(breakdown.features.reason.contains("DALI required but not available"));
    assert!(breakdown.features.reason.contains("Dimming required but not available"));
}

#[test]
fn test_unrequested_features_are_absent_from_reason() {
    let scorer = scorer();
    let item = item("20W downlight");

    let variant = variant_with_specs(1, "P", Shape::Round, None, Some(20.0), None);
    let (_, breakdown) = scorer.score_match(&item, &variant);
    assert_eq!(breakdown.features.score, 0.0);
    assert_eq!(breakdown.features.reason, "No special features required");
}
