//! Intelligent product substitution for lighting BOQ line items.
//!
//! Maps free-text procurement descriptions onto the closest catalog variant,
//! returning a ranked match with a normalized confidence and an explainable
//! per-criterion score breakdown. Given a non-empty catalog it never refuses
//! to answer; low-confidence results are flagged for human review instead.

pub mod boq;
pub mod catalog;
pub mod engine;
pub mod justify;
pub mod matcher;
pub mod models;
pub mod report;
pub mod text;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use engine::SubstitutionEngine;
pub use matcher::ScoringWeights;
pub use models::{BoqItem, IpRating, MatchResult, Shape, Variant};
pub use types::{EngineError, EngineResult};
