//! Weighted soft scoring of (requirement, variant) pairs.
//!
//! Never hard-filters: every criterion degrades to a partial score with a
//! reason, so any candidate can be ranked and the best available one wins.

use serde::{Deserialize, Serialize};

use crate::matcher::candidates::required_ip;
use crate::models::boq::BoqItem;
use crate::models::ip::IpRating;
use crate::models::score::{CriterionScore, ScoreBreakdown};
use crate::models::shape::compatible_shapes;
use crate::models::variant::Variant;

/// Configurable weights for the scoring criteria.
///
/// IP carries the most weight (safety/compliance), shape second
/// (fit/aesthetics), then performance specs, then requested features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub ip_rating: f32,
    pub shape: f32,
    pub wattage: f32,
    pub lumens: f32,
    pub efficacy_bonus: f32,
    pub emergency: f32,
    pub dali: f32,
    pub dimming: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ip_rating: 35.0,
            shape: 25.0,
            wattage: 15.0,
            lumens: 10.0,
            efficacy_bonus: 5.0,
            emergency: 5.0,
            dali: 3.0,
            dimming: 2.0,
        }
    }
}

/// Scores one requirement against one variant across independent criteria.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a match. Returns the normalized confidence in [0, 1] and the
    /// per-criterion breakdown.
    pub fn score_match(&self, item: &BoqItem, variant: &Variant) -> (f32, ScoreBreakdown) {
        let breakdown = ScoreBreakdown {
            ip: self.score_ip(item, variant),
            shape: self.score_shape(item, variant),
            wattage: self.score_wattage(item, variant),
            lumens: self.score_lumens(item, variant),
            efficacy: self.score_efficacy(variant),
            features: self.score_features(item, variant),
            ..Default::default()
        };

        let max_possible = self.max_possible(item);
        let confidence = if max_possible > 0.0 {
            (breakdown.total() / max_possible).clamp(0.0, 1.0)
        } else {
            0.0
        };

        (confidence, breakdown)
    }

    /// Normalization denominator: the always-applicable weights plus each
    /// feature weight only when that feature was requested.
    fn max_possible(&self, item: &BoqItem) -> f32 {
        let mut max = self.weights.ip_rating
            + self.weights.shape
            + self.weights.wattage
            + self.weights.lumens
            + self.weights.efficacy_bonus;

        if item.requires_emergency {
            max += self.weights.emergency;
        }
        if item.requires_dali {
            max += self.weights.dali;
        }
        if item.requires_dimming {
            max += self.weights.dimming;
        }
        max
    }

    /// IP criterion. A variant without a rating is treated as the lowest
    /// (IP20, indoor only). The penalty gap deliberately compares the two
    /// ratings' combined two-digit values, unlike `meets`.
    fn score_ip(&self, item: &BoqItem, variant: &Variant) -> CriterionScore {
        let weight = self.weights.ip_rating;
        let required = required_ip(item);
        let actual = variant
            .ip_rating
            .clone()
            .unwrap_or_else(|| IpRating::new(2, 0));

        if actual.meets(&required) {
            if actual.numeric_value() == required.numeric_value() {
                return CriterionScore::new(weight, format!("Exact IP match ({actual})"));
            }
            return CriterionScore::new(weight, format!("{actual} meets requirement"));
        }

        let gap =
            i32::from(required.numeric_value()) - i32::from(actual.numeric_value());
        if gap >= 45 {
            CriterionScore::new(
                weight * 0.1,
                format!("CRITICAL: {actual} insufficient for {required} requirement"),
            )
        } else if gap >= 25 {
            CriterionScore::new(
                weight * 0.3,
                format!("WARNING: {actual} below {required} requirement"),
            )
        } else {
            CriterionScore::new(
                weight * 0.6,
                format!("{actual} slightly below {required} requirement"),
            )
        }
    }

    fn score_shape(&self, item: &BoqItem, variant: &Variant) -> CriterionScore {
        let weight = self.weights.shape;

        let Some(requested) = item.requested_shape else {
            return CriterionScore::new(weight * 0.7, "No specific shape requested");
        };
        if requested == crate::models::shape::Shape::Unknown {
            return CriterionScore::new(weight * 0.7, "Shape not specified");
        }

        if variant.shape == requested {
            return CriterionScore::new(weight, format!("Exact {requested} match"));
        }

        if compatible_shapes(requested).contains(&variant.shape) {
            return CriterionScore::new(
                weight * 0.7,
                format!("{} compatible with {requested}", variant.shape),
            );
        }

        CriterionScore::new(
            weight * 0.2,
            format!(
                "Shape mismatch: requested {requested}, got {}",
                variant.shape
            ),
        )
    }

    fn score_wattage(&self, item: &BoqItem, variant: &Variant) -> CriterionScore {
        let weight = self.weights.wattage;

        let Some(requested) = item.requested_wattage else {
            return CriterionScore::new(weight * 0.7, "No specific wattage requested");
        };
        let Some(actual) = variant.power_w else {
            return CriterionScore::new(weight * 0.3, "Variant wattage unknown");
        };

        let diff_percent = ((actual - requested).abs() / requested) * 100.0;

        if diff_percent <= 5.0 {
            CriterionScore::new(weight, format!("Exact wattage match ({actual}W)"))
        } else if diff_percent <= 10.0 {
            CriterionScore::new(
                weight * 0.95,
                format!("{actual}W within 10% of requested {requested}W"),
            )
        } else if diff_percent <= 20.0 {
            CriterionScore::new(
                weight * 0.85,
                format!("{actual}W within 20% tolerance of {requested}W"),
            )
        } else if diff_percent <= 30.0 {
            CriterionScore::new(
                weight * 0.6,
                format!("{actual}W is {diff_percent:.0}% from requested {requested}W"),
            )
        } else {
            let direction = if actual > requested { "higher" } else { "lower" };
            CriterionScore::new(
                weight * 0.3,
                format!(
                    "{actual}W significantly {direction} than {requested}W ({diff_percent:.0}% difference)"
                ),
            )
        }
    }

    fn score_lumens(&self, item: &BoqItem, variant: &Variant) -> CriterionScore {
        let weight = self.weights.lumens;

        let Some(requested) = item.requested_lumens else {
            // No lumen figure stated: derive an expectation from the wattage
            // at 100 lm/W when possible.
            if let (Some(wattage), Some(actual)) = (item.requested_wattage, variant.lumen) {
                return score_lumen_value(weight, wattage * 100.0, actual);
            }
            return CriterionScore::new(weight * 0.7, "No specific lumen output requested");
        };

        let Some(actual) = variant.lumen else {
            return CriterionScore::new(weight * 0.3, "Variant lumen output unknown");
        };

        score_lumen_value(weight, requested, actual)
    }

    /// Efficacy is a bonus: absence scores zero, never a penalty.
    fn score_efficacy(&self, variant: &Variant) -> CriterionScore {
        let weight = self.weights.efficacy_bonus;

        let Some(efficacy) = variant.efficacy() else {
            return CriterionScore::new(0.0, "Efficacy unknown");
        };

        if efficacy >= 130.0 {
            CriterionScore::new(weight, format!("Excellent efficacy ({efficacy:.0} lm/W)"))
        } else if efficacy >= 110.0 {
            CriterionScore::new(
                weight * 0.8,
                format!("Very good efficacy ({efficacy:.0} lm/W)"),
            )
        } else if efficacy >= 90.0 {
            CriterionScore::new(weight * 0.5, format!("Good efficacy ({efficacy:.0} lm/W)"))
        } else if efficacy >= 70.0 {
            CriterionScore::new(
                weight * 0.2,
                format!("Standard efficacy ({efficacy:.0} lm/W)"),
            )
        } else {
            CriterionScore::new(0.0, format!("Low efficacy ({efficacy:.0} lm/W)"))
        }
    }

    /// Each requested feature is awarded independently; unrequested features
    /// contribute nothing and stay out of the reason text.
    fn score_features(&self, item: &BoqItem, variant: &Variant) -> CriterionScore {
        let mut score = 0.0;
        let mut reasons: Vec<&str> = Vec::new();

        if item.requires_emergency {
            if variant.is_emergency {
                score += self.weights.emergency;
                reasons.push("Emergency backup included");
            } else {
                reasons.push("WARNING: Emergency required but not available");
            }
        }

        if item.requires_dali {
            if variant.is_dali {
                score += self.weights.dali;
                reasons.push("DALI compatible");
            } else {
                reasons.push("WARNING: DALI required but not available");
            }
        }

        if item.requires_dimming {
            if !variant.dimming.is_empty() || variant.is_dali {
                score += self.weights.dimming;
                reasons.push("Dimmable");
            } else {
                reasons.push("WARNING: Dimming required but not available");
            }
        }

        let reason = if reasons.is_empty() {
            "No special features required".to_string()
        } else {
            reasons.join("; ")
        };
        CriterionScore::new(score, reason)
    }
}

/// Lumen comparison with an asymmetric tolerance band: a bit more light is
/// acceptable (and slightly preferred), a shortfall less so.
fn score_lumen_value(weight: f32, requested: f64, actual: f64) -> CriterionScore {
    let diff_percent = ((actual - requested) / requested) * 100.0;

    if diff_percent.abs() <= 5.0 {
        CriterionScore::new(weight, format!("Lumen output matches ({actual:.0}lm)"))
    } else if (-15.0..=20.0).contains(&diff_percent) {
        let bonus = if diff_percent > 0.0 { 0.05 } else { 0.0 };
        let direction = if diff_percent > 0.0 { "higher" } else { "lower" };
        CriterionScore::new(
            weight * (0.9 + bonus),
            format!(
                "{actual:.0}lm ({:.0}% {direction} than {requested:.0}lm)",
                diff_percent.abs()
            ),
        )
    } else if (-25.0..=30.0).contains(&diff_percent) {
        CriterionScore::new(weight * 0.6, format!("{actual:.0}lm outside 15% tolerance"))
    } else {
        CriterionScore::new(
            weight * 0.3,
            format!("{actual:.0}lm significantly different from {requested:.0}lm"),
        )
    }
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
