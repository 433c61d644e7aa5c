//! Stateful BOQ parsing session with continuation ("ditto") resolution.
//!
//! A session carries exactly one piece of state: the most recently produced
//! item. Scope one session per file/batch; two concurrent batches need two
//! sessions.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::boq::extract::{self, ParsedSpecs};
use crate::boq::reader::{self, RowFields};
use crate::models::boq::{BoqItem, SpecDelta};
use crate::models::ip::IpRating;
use crate::text;

/// Back-reference tokens. Matched against normalized (lowercased) text.
const CONTINUATION_PATTERNS: &[&str] = &[
    r"\bditto\b",
    r"\bsame\s+as\s+above\b",
    r"\bsame\s+as\s+previous\b",
    r"\bas\s+above\b",
    r"\brepeat\b",
    r"\bid\.",
    r"\bidem\b",
];

static RE_CONTINUATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CONTINUATION_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex"))
        .collect()
});

/// `same as item3`-style reference to a named prior line.
static RE_SAME_AS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"same\s+as\s+\w+").expect("Invalid regex"));

/// Modification clause: everything after the word "but".
static RE_BUT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"but\s+(.+)").expect("Invalid regex"));

/// Wattage override inside a "but" clause.
static RE_DELTA_WATTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*w").expect("Invalid regex"));

/// Parsing session for one BOQ file.
#[derive(Debug, Default)]
pub struct ParseSession {
    previous: Option<BoqItem>,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one row into an item. Returns `None` when the row has no usable
    /// description; the batch continues without it.
    ///
    /// Continuation resolution runs before generic extraction; a line is
    /// never both.
    pub fn parse_row(&mut self, row_number: usize, fields: &RowFields) -> Option<BoqItem> {
        let description = reader::find_description(fields);
        if description.trim().is_empty() {
            log::debug!("Row {row_number}: no usable description, skipping");
            return None;
        }

        let item = match (&self.previous, detect_continuation(&description)) {
            (Some(previous), Some(deltas)) => {
                continuation_item(row_number, &description, fields, previous, deltas)
            }
            _ => fresh_item(row_number, &description, fields),
        };

        self.previous = Some(item.clone());
        Some(item)
    }

    /// Parse a single ad-hoc description with no surrounding file.
    pub fn parse_description(&mut self, description: &str) -> Option<BoqItem> {
        let fields: RowFields = vec![("description".to_string(), description.to_string())];
        self.parse_row(1, &fields)
    }
}

/// Detect a back-reference line. Returns its deltas (possibly empty) when the
/// line is a continuation.
fn detect_continuation(description: &str) -> Option<Vec<SpecDelta>> {
    let normalized = text::normalize(description);

    let is_reference = RE_CONTINUATION
        .iter()
        .any(|regex| regex.is_match(&normalized))
        || RE_SAME_AS.is_match(&normalized);
    if !is_reference {
        return None;
    }

    Some(extract_deltas(&normalized))
}

/// Pull field overrides out of the "but" clause, if any.
fn extract_deltas(normalized: &str) -> Vec<SpecDelta> {
    let Some(caps) = RE_BUT_CLAUSE.captures(normalized) else {
        return Vec::new();
    };
    let clause = &caps[1];

    let mut deltas = Vec::new();
    if clause.contains("emergency") || clause.split_whitespace().any(|word| word == "em") {
        deltas.push(SpecDelta::Emergency);
    }
    if clause.contains("dali") {
        deltas.push(SpecDelta::Dali);
    }
    if let Some(ip) = IpRating::parse(clause) {
        deltas.push(SpecDelta::Ip { value: ip });
    }
    if let Some(caps) = RE_DELTA_WATTAGE.captures(clause) {
        if let Ok(value) = caps[1].parse() {
            deltas.push(SpecDelta::Wattage { value });
        }
    }
    deltas
}

/// Copy every specification field of the prior item, then overwrite only the
/// delta'd fields.
fn continuation_item(
    row_number: usize,
    description: &str,
    fields: &RowFields,
    previous: &BoqItem,
    deltas: Vec<SpecDelta>,
) -> BoqItem {
    let mut item = BoqItem {
        row_number,
        raw_description: description.to_string(),
        quantity: reader::extract_quantity(fields),
        requested_wattage: previous.requested_wattage,
        requested_lumens: previous.requested_lumens,
        requested_ip: previous.requested_ip.clone(),
        requested_shape: previous.requested_shape,
        requested_cct_k: previous.requested_cct_k,
        requested_length_mm: previous.requested_length_mm,
        requested_beam_deg: previous.requested_beam_deg,
        environment: previous.environment,
        requires_emergency: previous.requires_emergency,
        requires_dali: previous.requires_dali,
        requires_dimming: previous.requires_dimming,
        is_continuation: true,
        continuation_source_row: Some(previous.row_number),
        continuation_deltas: deltas.clone(),
        parsed_fields: fields_map(fields),
    };

    for delta in deltas {
        match delta {
            SpecDelta::Emergency => item.requires_emergency = true,
            SpecDelta::Dali => item.requires_dali = true,
            SpecDelta::Ip { value } => item.requested_ip = Some(value),
            SpecDelta::Wattage { value } => item.requested_wattage = Some(value),
        }
    }

    item
}

fn fresh_item(row_number: usize, description: &str, fields: &RowFields) -> BoqItem {
    let side_values: Vec<String> = fields.iter().map(|(_, value)| value.clone()).collect();
    let specs: ParsedSpecs = extract::extract_specs(description, &side_values);

    BoqItem {
        row_number,
        raw_description: description.to_string(),
        quantity: reader::extract_quantity(fields),
        requested_wattage: specs.wattage,
        requested_lumens: specs.lumens,
        requested_ip: specs.ip_rating,
        requested_shape: specs.shape,
        requested_cct_k: specs.cct_k,
        requested_length_mm: specs.length_mm,
        requested_beam_deg: specs.beam_deg,
        environment: specs.environment,
        requires_emergency: specs.is_emergency,
        requires_dali: specs.is_dali,
        requires_dimming: specs.is_dimming,
        is_continuation: false,
        continuation_source_row: None,
        continuation_deltas: Vec::new(),
        parsed_fields: fields_map(fields),
    }
}

fn fields_map(fields: &RowFields) -> BTreeMap<String, String> {
    fields
        .iter()
        .map(|(header, value)| (header.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
