//! BOQ (Bill of Quantities) requirement line record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::environment::Environment;
use crate::models::ip::IpRating;
use crate::models::shape::Shape;

/// A field override detected in a continuation line's "but" clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field")]
pub enum SpecDelta {
    /// Emergency backup required.
    Emergency,
    /// DALI control required.
    Dali,
    /// IP rating override.
    Ip { value: IpRating },
    /// Wattage override.
    Wattage { value: f64 },
}

impl std::fmt::Display for SpecDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecDelta::Emergency => write!(f, "emergency"),
            SpecDelta::Dali => write!(f, "dali"),
            SpecDelta::Ip { value } => write!(f, "ip={value}"),
            SpecDelta::Wattage { value } => write!(f, "wattage={value}W"),
        }
    }
}

/// One procurement requirement line, as extracted from a BOQ row.
///
/// Built once per line (fresh extraction or continuation copy) and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoqItem {
    pub row_number: usize,
    pub raw_description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    // Requested specifications (absent means "not stated")
    #[serde(default)]
    pub requested_wattage: Option<f64>,
    #[serde(default)]
    pub requested_lumens: Option<f64>,
    #[serde(default)]
    pub requested_ip: Option<IpRating>,
    #[serde(default)]
    pub requested_shape: Option<Shape>,
    #[serde(default)]
    pub requested_cct_k: Option<f64>,
    #[serde(default)]
    pub requested_length_mm: Option<f64>,
    #[serde(default)]
    pub requested_beam_deg: Option<f64>,

    /// Inferred installation context, dry indoor when nothing suggests
    /// otherwise.
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub requires_emergency: bool,
    #[serde(default)]
    pub requires_dali: bool,
    #[serde(default)]
    pub requires_dimming: bool,

    // Continuation ("ditto") metadata
    #[serde(default)]
    pub is_continuation: bool,
    #[serde(default)]
    pub continuation_source_row: Option<usize>,
    #[serde(default)]
    pub continuation_deltas: Vec<SpecDelta>,

    /// Raw source fields, kept for reference output.
    #[serde(default)]
    pub parsed_fields: BTreeMap<String, String>,
}

fn default_quantity() -> u32 {
    1
}

#[cfg(test)]
#[path = "tests/boq_tests.rs"]
mod tests;
