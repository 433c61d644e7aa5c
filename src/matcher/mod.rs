//! Requirement-to-variant matching: candidate funnel, weighted scoring, and
//! deterministic ranking.

pub mod candidates;
pub mod rank;
pub mod scoring;

pub use candidates::generate_candidates;
pub use rank::{rank_candidates, RankedCandidate};
pub use scoring::{Scorer, ScoringWeights};
