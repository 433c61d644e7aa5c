//! Candidate ranking and selection.

use crate::catalog::Catalog;
use crate::matcher::scoring::Scorer;
use crate::models::boq::BoqItem;
use crate::models::score::ScoreBreakdown;

/// One scored candidate, ready for result assembly.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub variant_id: usize,
    pub confidence: f32,
    pub breakdown: ScoreBreakdown,
}

/// Sort ranked candidates deterministically:
/// confidence desc, then SKU asc, then row id asc.
fn sort_ranked_deterministic(candidates: &mut [RankedCandidate], catalog: &Catalog) {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                catalog
                    .variant(a.variant_id)
                    .sku
                    .cmp(&catalog.variant(b.variant_id).sku)
            })
            .then_with(|| {
                catalog
                    .variant(a.variant_id)
                    .row_id
                    .cmp(&catalog.variant(b.variant_id).row_id)
            })
    });
}

/// Score every candidate, sort, and keep the top `top_n`.
///
/// An empty candidate set is a contract violation of the candidate funnel;
/// this function simply returns an empty list and the engine surfaces the
/// catalog-level error.
pub fn rank_candidates(
    item: &BoqItem,
    candidate_ids: &[usize],
    catalog: &Catalog,
    scorer: &Scorer,
    top_n: usize,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidate_ids
        .iter()
        .map(|&variant_id| {
            let (confidence, breakdown) = scorer.score_match(item, catalog.variant(variant_id));
            RankedCandidate {
                variant_id,
                confidence,
                breakdown,
            }
        })
        .collect();

    sort_ranked_deterministic(&mut ranked, catalog);
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
#[path = "tests/rank_tests.rs"]
mod tests;
