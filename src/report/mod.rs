//! Result writers: CSV, JSON, and plain-text report, selected by the output
//! file's extension.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde_json::json;

use crate::justify;
use crate::models::score::MatchResult;
use crate::types::{EngineError, EngineResult};

/// Write results in the format implied by `path`'s extension: `.csv`,
/// `.json`, or anything else as the text report.
pub fn write_results(results: &[MatchResult], path: &Path) -> EngineResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "csv" => write_csv(results, path),
        "json" => write_json(results, path),
        _ => write_text(results, path),
    }
}

fn write_csv(results: &[MatchResult], path: &Path) -> EngineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "BOQ_Row",
        "BOQ_Description",
        "Matched_SKU",
        "Matched_Category",
        "Price",
        "Wattage",
        "Lumens",
        "IP_Rating",
        "Confidence_Score",
        "Confidence_Level",
        "Justification",
        "Warnings",
        "Needs_Review",
        "Alt_1_SKU",
        "Alt_1_Score",
        "Alt_2_SKU",
        "Alt_2_Score",
    ])?;

    for result in results {
        let description: String = result.item.raw_description.chars().take(100).collect();
        let alt = |index: usize| -> (String, String) {
            result
                .alternatives
                .get(index)
                .map(|alt| {
                    (
                        alt.variant.sku.clone(),
                        format!("{:.0}%", alt.confidence * 100.0),
                    )
                })
                .unwrap_or_default()
        };
        let (alt_1_sku, alt_1_score) = alt(0);
        let (alt_2_sku, alt_2_score) = alt(1);

        writer.write_record([
            result.item.row_number.to_string(),
            description,
            result.variant.sku.clone(),
            result.variant.category.clone(),
            format!("{:.2}", result.variant.price),
            result
                .variant
                .power_w
                .map(|power| power.to_string())
                .unwrap_or_default(),
            result
                .variant
                .lumen
                .map(|lumen| lumen.to_string())
                .unwrap_or_default(),
            result
                .variant
                .ip_rating
                .as_ref()
                .map(|ip| ip.to_string())
                .unwrap_or_default(),
            format!("{:.2}", result.confidence),
            result.tier().to_string(),
            result.justification.clone(),
            result.warnings.join("; "),
            if result.needs_review() { "YES" } else { "NO" }.to_string(),
            alt_1_sku,
            alt_1_score,
            alt_2_sku,
            alt_2_score,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_json(results: &[MatchResult], path: &Path) -> EngineResult<()> {
    let high_confidence = results.iter().filter(|r| r.confidence >= 0.85).count();
    let needs_review = results.iter().filter(|r| r.needs_review()).count();

    let items: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            json!({
                "boq_row": result.item.row_number,
                "boq_description": result.item.raw_description,
                "is_continuation": result.item.is_continuation,
                "match": {
                    "sku": result.variant.sku,
                    "category": result.variant.category,
                    "price": result.variant.price,
                    "wattage": result.variant.power_w,
                    "lumens": result.variant.lumen,
                    "ip_rating": result.variant.ip_rating.as_ref().map(|ip| ip.to_string()),
                    "shape": result.variant.shape.to_string(),
                },
                "confidence_score": result.confidence,
                "confidence_level": result.tier().to_string(),
                "justification": result.justification,
                "warnings": result.warnings,
                "needs_review": result.needs_review(),
                "score_breakdown": {
                    "ip": {"score": result.breakdown.ip.score, "reason": result.breakdown.ip.reason},
                    "shape": {"score": result.breakdown.shape.score, "reason": result.breakdown.shape.reason},
                    "wattage": {"score": result.breakdown.wattage.score, "reason": result.breakdown.wattage.reason},
                    "lumens": {"score": result.breakdown.lumens.score, "reason": result.breakdown.lumens.reason},
                    "efficacy": {"score": result.breakdown.efficacy.score, "reason": result.breakdown.efficacy.reason},
                    "features": {"score": result.breakdown.features.score, "reason": result.breakdown.features.reason},
                },
                "alternatives": result.alternatives.iter().map(|alt| json!({
                    "sku": alt.variant.sku,
                    "confidence_score": alt.confidence,
                    "justification": alt.justification,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = json!({
        "generated_at": chrono::Local::now().to_rfc3339(),
        "total_items": results.len(),
        "high_confidence_count": high_confidence,
        "needs_review_count": needs_review,
        "results": items,
    });

    let text = serde_json::to_string_pretty(&output)
        .map_err(|e| EngineError::Report(e.to_string()))?;
    File::create(path)?.write_all(text.as_bytes())?;
    Ok(())
}

fn write_text(results: &[MatchResult], path: &Path) -> EngineResult<()> {
    let report = justify::format_batch_report(results);
    File::create(path)?.write_all(report.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
