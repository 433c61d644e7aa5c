//! Score breakdown and match result types.

use serde::{Deserialize, Serialize};

use crate::models::boq::BoqItem;
use crate::models::variant::Variant;

/// One criterion's weighted score and the reason behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: f32,
    pub reason: String,
}

impl CriterionScore {
    pub fn new(score: f32, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }
}

/// Per-criterion breakdown of a match score.
///
/// The cct/length/beam/text_relevance slots are carried for the output
/// contract but not scored by the current criteria set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ip: CriterionScore,
    pub shape: CriterionScore,
    pub wattage: CriterionScore,
    pub lumens: CriterionScore,
    pub efficacy: CriterionScore,
    pub features: CriterionScore,
    pub cct: CriterionScore,
    pub length: CriterionScore,
    pub beam: CriterionScore,
    pub text_relevance: CriterionScore,
}

impl ScoreBreakdown {
    /// Sum of every component score.
    pub fn total(&self) -> f32 {
        self.ip.score
            + self.shape.score
            + self.wattage.score
            + self.lumens.score
            + self.efficacy.score
            + self.features.score
            + self.cct.score
            + self.length.score
            + self.beam.score
            + self.text_relevance.score
    }
}

/// Confidence band derived from the normalized confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.9 {
            ConfidenceTier::High
        } else if confidence >= 0.7 {
            ConfidenceTier::Medium
        } else if confidence >= 0.5 {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::VeryLow
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceTier::High => write!(f, "HIGH"),
            ConfidenceTier::Medium => write!(f, "MEDIUM"),
            ConfidenceTier::Low => write!(f, "LOW"),
            ConfidenceTier::VeryLow => write!(f, "VERY LOW"),
        }
    }
}

/// Result of matching one BOQ item to a catalog variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub item: BoqItem,
    pub variant: Variant,

    /// Normalized confidence in [0, 1].
    pub confidence: f32,
    pub breakdown: ScoreBreakdown,

    /// Human-readable justification, filled by the justifier.
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub warnings: Vec<String>,

    /// Runner-up matches; their own `alternatives` are always empty.
    #[serde(default)]
    pub alternatives: Vec<MatchResult>,
}

impl MatchResult {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Low confidence or any warning flags the match for human review.
    pub fn needs_review(&self) -> bool {
        self.confidence < 0.7 || !self.warnings.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/score_tests.rs"]
mod tests;
