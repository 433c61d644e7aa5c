//! Human-readable justification and warning generation.
//!
//! Consumes score breakdowns; contributes no matching logic. The warnings
//! produced here drive the review flag on a match.

use crate::models::boq::BoqItem;
use crate::models::score::{MatchResult, ScoreBreakdown};
use crate::models::variant::Variant;

/// Generate a one-paragraph justification for a match.
pub fn generate_justification(
    item: &BoqItem,
    variant: &Variant,
    confidence: f32,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut parts = vec![opening(confidence, variant)];

    let factors = key_factors(breakdown);
    if !factors.is_empty() {
        parts.push(format!("Key factors: {factors}"));
    }

    let tradeoffs = tradeoffs(item, variant, breakdown);
    if !tradeoffs.is_empty() {
        parts.push(format!("Note: {tradeoffs}"));
    }

    parts.join(" ")
}

fn opening(confidence: f32, variant: &Variant) -> String {
    let sku = &variant.sku;
    if confidence >= 0.95 {
        format!("Excellent match: {sku} precisely meets all specifications.")
    } else if confidence >= 0.85 {
        format!("Strong match: {sku} meets requirements with minor variations.")
    } else if confidence >= 0.70 {
        format!("Good match: {sku} is a suitable alternative.")
    } else if confidence >= 0.50 {
        format!("Acceptable match: {sku} is the closest available option.")
    } else {
        format!("Best available: {sku} selected as nearest engineering equivalent.")
    }
}

fn key_factors(breakdown: &ScoreBreakdown) -> String {
    let mut factors: Vec<String> = Vec::new();

    let ip_reason = breakdown.ip.reason.to_lowercase();
    if ip_reason.contains("meets") || ip_reason.contains("exact") {
        let lead = breakdown
            .ip
            .reason
            .split('(')
            .next()
            .unwrap_or_default()
            .trim();
        factors.push(lead.to_string());
    }

    let shape_reason = breakdown.shape.reason.to_lowercase();
    if shape_reason.contains("exact") {
        factors.push("correct shape".to_string());
    } else if shape_reason.contains("compatible") {
        factors.push("compatible shape".to_string());
    }

    let wattage_reason = breakdown.wattage.reason.to_lowercase();
    if breakdown.wattage.score > 0.0 {
        if wattage_reason.contains("exact") {
            factors.push("exact wattage".to_string());
        } else if wattage_reason.contains("within") {
            factors.push(wattage_reason);
        }
    }

    let efficacy_reason = breakdown.efficacy.reason.to_lowercase();
    if efficacy_reason.contains("excellent") {
        factors.push("excellent energy efficiency".to_string());
    } else if efficacy_reason.contains("very good") {
        factors.push("high efficiency".to_string());
    }

    factors.join(", ")
}

fn tradeoffs(item: &BoqItem, variant: &Variant, breakdown: &ScoreBreakdown) -> String {
    let mut notes: Vec<String> = Vec::new();

    if let (Some(requested), Some(actual)) = (item.requested_wattage, variant.power_w) {
        let diff = actual - requested;
        if diff.abs() > 2.0 {
            let direction = if diff > 0.0 { "higher" } else { "lower" };
            let percent = diff.abs() / requested * 100.0;
            notes.push(format!("{percent:.0}% {direction} wattage"));
        }
    }

    if breakdown.ip.reason.contains("CRITICAL") || breakdown.ip.reason.contains("WARNING") {
        notes.push("IP rating review recommended".to_string());
    }

    if breakdown.features.reason.contains("WARNING") {
        if breakdown.features.reason.contains("Emergency") {
            notes.push("emergency option may need separate sourcing".to_string());
        }
        if breakdown.features.reason.contains("DALI") {
            notes.push("DALI variant recommended".to_string());
        }
    }

    notes.join("; ")
}

/// Generate warning messages for issues requiring attention. Any warning
/// flags the match for review.
pub fn generate_warnings(
    item: &BoqItem,
    variant: &Variant,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if breakdown.ip.reason.contains("CRITICAL") {
        let rated = variant
            .ip_rating
            .as_ref()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "IP20".to_string());
        warnings.push(format!(
            "IP RATING MISMATCH: Variant is {rated} but application requires higher \
             protection. Verify suitability for {} environment.",
            item.environment
        ));
    }

    if breakdown.shape.reason.to_lowercase().contains("mismatch") {
        let requested = item
            .requested_shape
            .map(|shape| shape.to_string())
            .unwrap_or_else(|| "unspecified".to_string());
        warnings.push(format!(
            "SHAPE: Requested {requested} but matched {}. Verify physical compatibility.",
            variant.shape
        ));
    }

    if item.requires_emergency && !variant.is_emergency {
        warnings.push(
            "EMERGENCY: Variant does not include emergency backup. Consider emergency \
             conversion kit or alternative SKU."
                .to_string(),
        );
    }

    if item.requires_dali && !variant.is_dali {
        warnings.push(
            "DALI: Variant is not DALI compatible. Check for DALI variant or separate \
             DALI driver."
                .to_string(),
        );
    }

    if let (Some(requested), Some(actual)) = (item.requested_wattage, variant.power_w) {
        let diff_pct = (actual - requested).abs() / requested * 100.0;
        if diff_pct > 25.0 {
            warnings.push(format!(
                "WATTAGE: {diff_pct:.0}% difference from specification. Requested \
                 {requested}W, matched {actual}W. Verify lighting design calculations."
            ));
        }
    }

    warnings
}

/// Format a complete single-match summary block.
pub fn format_match_summary(result: &MatchResult) -> String {
    let mut lines = Vec::new();

    let description: String = result.item.raw_description.chars().take(60).collect();
    lines.push(format!(
        "BOQ Row {}: {description}...",
        result.item.row_number
    ));
    lines.push("-".repeat(70));

    lines.push(format!("  Matched SKU: {}", result.variant.sku));
    lines.push(format!("  Category: {}", result.variant.category));
    lines.push(format!("  Price: {:.2}", result.variant.price));

    let mut specs = Vec::new();
    if let Some(power) = result.variant.power_w {
        specs.push(format!("{power}W"));
    }
    if let Some(lumen) = result.variant.lumen {
        specs.push(format!("{lumen:.0}lm"));
    }
    if let Some(ip) = &result.variant.ip_rating {
        specs.push(ip.to_string());
    }
    if !specs.is_empty() {
        lines.push(format!("  Specifications: {}", specs.join(" | ")));
    }

    lines.push(format!(
        "  Confidence: {:.0}% ({})",
        result.confidence * 100.0,
        result.tier()
    ));
    lines.push(format!("  Justification: {}", result.justification));

    if !result.warnings.is_empty() {
        lines.push("  WARNINGS:".to_string());
        for warning in &result.warnings {
            lines.push(format!("    - {warning}"));
        }
    }

    if result.needs_review() {
        lines.push("  >>> FLAGGED FOR HUMAN REVIEW <<<".to_string());
    }

    lines.join("\n")
}

/// Format the report for a whole batch of matches.
pub fn format_batch_report(results: &[MatchResult]) -> String {
    let mut lines = Vec::new();

    let total = results.len().max(1);
    let high_confidence = results.iter().filter(|r| r.confidence >= 0.85).count();
    let needs_review = results.iter().filter(|r| r.needs_review()).count();

    lines.push("=".repeat(70));
    lines.push("PRODUCT SUBSTITUTION REPORT".to_string());
    lines.push("=".repeat(70));
    lines.push(format!("Total Items: {}", results.len()));
    lines.push(format!(
        "High Confidence Matches: {high_confidence} ({:.0}%)",
        high_confidence as f32 / total as f32 * 100.0
    ));
    lines.push(format!(
        "Flagged for Review: {needs_review} ({:.0}%)",
        needs_review as f32 / total as f32 * 100.0
    ));
    lines.push("=".repeat(70));
    lines.push(String::new());

    for result in results {
        lines.push(format_match_summary(result));
        lines.push(String::new());
    }

    lines.push("=".repeat(70));
    lines.push("LEGEND:".to_string());
    lines.push("  HIGH confidence (>85%): Proceed with order".to_string());
    lines.push("  MEDIUM confidence (70-85%): Review recommended".to_string());
    lines.push("  LOW confidence (<70%): Manual selection required".to_string());
    lines.push("=".repeat(70));

    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/justify_tests.rs"]
mod tests;
