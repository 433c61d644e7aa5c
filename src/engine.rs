//! The substitution engine: orchestrates parsing, candidate generation,
//! scoring, ranking, and justification.
//!
//! Philosophy: never return "no results". Given a non-empty catalog, every
//! requirement line resolves to the closest available variant with the
//! trade-offs explained.

use std::path::Path;

use crate::boq::{reader, ParseSession};
use crate::catalog::{Catalog, CatalogStats};
use crate::justify;
use crate::matcher::{generate_candidates, rank_candidates, RankedCandidate, Scorer, ScoringWeights};
use crate::models::boq::BoqItem;
use crate::models::score::MatchResult;
use crate::types::{EngineError, EngineResult};

/// Default number of alternative matches carried alongside the best one.
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// Intelligent product substitution engine.
pub struct SubstitutionEngine {
    catalog: Option<Catalog>,
    scorer: Scorer,
}

impl SubstitutionEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            catalog: None,
            scorer: Scorer::new(weights),
        }
    }

    /// Engine with an already-built catalog.
    pub fn with_catalog(catalog: Catalog, weights: ScoringWeights) -> Self {
        Self {
            catalog: Some(catalog),
            scorer: Scorer::new(weights),
        }
    }

    /// Load the variant catalog. Returns the number of variants loaded.
    pub fn load_catalog(&mut self, path: &Path) -> EngineResult<usize> {
        let catalog = Catalog::load_from_path(path)?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog(format!(
                "no variants loaded from {}",
                path.display()
            )));
        }
        let count = catalog.len();
        self.catalog = Some(catalog);
        Ok(count)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    fn loaded_catalog(&self) -> EngineResult<&Catalog> {
        let catalog = self.catalog.as_ref().ok_or(EngineError::CatalogNotLoaded)?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog("catalog has no variants".into()));
        }
        Ok(catalog)
    }

    /// Process a whole BOQ file. Each batch gets its own parse session, so
    /// continuation state never leaks between files. Rows without a usable
    /// description are skipped, not fatal.
    pub fn process_file(
        &self,
        path: &Path,
        num_alternatives: usize,
    ) -> EngineResult<Vec<MatchResult>> {
        let catalog = self.loaded_catalog()?;
        let rows = reader::read_rows(path)?;

        let mut session = ParseSession::new();
        let mut results = Vec::new();
        // Data rows start at 2; row 1 is the header.
        for (index, fields) in rows.iter().enumerate() {
            let Some(item) = session.parse_row(index + 2, fields) else {
                continue;
            };
            results.push(self.match_item(catalog, item, num_alternatives));
        }

        log::info!(
            "Processed {} of {} rows from {}",
            results.len(),
            rows.len(),
            path.display()
        );
        Ok(results)
    }

    /// Match a single ad-hoc description.
    pub fn match_description(
        &self,
        description: &str,
        num_alternatives: usize,
    ) -> EngineResult<MatchResult> {
        let catalog = self.loaded_catalog()?;
        let mut session = ParseSession::new();
        let item = session
            .parse_description(description)
            .ok_or_else(|| EngineError::UnusableInput(description.to_string()))?;
        Ok(self.match_item(catalog, item, num_alternatives))
    }

    /// Find the best match for an already-parsed item.
    pub fn best_match(&self, item: BoqItem, num_alternatives: usize) -> EngineResult<MatchResult> {
        let catalog = self.loaded_catalog()?;
        Ok(self.match_item(catalog, item, num_alternatives))
    }

    fn match_item(
        &self,
        catalog: &Catalog,
        item: BoqItem,
        num_alternatives: usize,
    ) -> MatchResult {
        let candidates = generate_candidates(&item, catalog);
        let ranked = rank_candidates(
            &item,
            &candidates,
            catalog,
            &self.scorer,
            num_alternatives + 1,
        );

        let alternatives: Vec<MatchResult> = ranked[1..]
            .iter()
            .map(|candidate| self.assemble(catalog, &item, candidate, Vec::new()))
            .collect();
        self.assemble(catalog, &item, &ranked[0], alternatives)
    }

    fn assemble(
        &self,
        catalog: &Catalog,
        item: &BoqItem,
        candidate: &RankedCandidate,
        alternatives: Vec<MatchResult>,
    ) -> MatchResult {
        let variant = catalog.variant(candidate.variant_id).clone();
        let justification = justify::generate_justification(
            item,
            &variant,
            candidate.confidence,
            &candidate.breakdown,
        );
        let warnings = justify::generate_warnings(item, &variant, &candidate.breakdown);

        MatchResult {
            item: item.clone(),
            variant,
            confidence: candidate.confidence,
            breakdown: candidate.breakdown.clone(),
            justification,
            warnings,
            alternatives,
        }
    }

    /// Catalog statistics plus the active scoring weights.
    pub fn stats(&self) -> EngineResult<EngineStats> {
        let catalog = self.loaded_catalog()?;
        Ok(EngineStats {
            catalog: catalog.stats(),
            weights: self.scorer.weights().clone(),
        })
    }
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Statistics snapshot for the stats output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EngineStats {
    pub catalog: CatalogStats,
    pub weights: ScoringWeights,
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
