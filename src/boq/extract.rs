//! Specification extraction from free-text requirement lines.
//!
//! Every extraction is independent and tolerant: failing to extract one
//! attribute never blocks the others, and absence stays `None`, never zero.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::environment::{infer_environment, Environment};
use crate::models::ip::IpRating;
use crate::models::shape::{infer_shape, Shape};
use crate::text;

/// `38W`, `38 watt`, `38watts`. The W/m (wattage-per-length) form is
/// filtered out by `is_per_length_form`, not by the pattern itself.
static RE_WATTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*w(?:att)?s?").expect("Invalid regex"));

/// `3000lm`, `3000 lumens`.
static RE_LUMENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:lm|lumen|lumens)").expect("Invalid regex")
});

/// `4000K` (3-4 digits).
static RE_CCT_K: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})\s*[kK]").expect("Invalid regex"));

/// `4000 kelvin`.
static RE_CCT_KELVIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*kelvin").expect("Invalid regex"));

/// `1200mm`.
static RE_LENGTH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*mm").expect("Invalid regex"));

/// `1.2m` (not followed by another word character, so not `mm`).
static RE_LENGTH_M: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*m\b").expect("Invalid regex"));

/// `L1200` shorthand.
static RE_LENGTH_L: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)L\s*(\d+)").expect("Invalid regex"));

/// `60deg`, `60°`.
static RE_BEAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:deg|degree|degrees|°)").expect("Invalid regex")
});

const EMERGENCY_PATTERNS: &[&str] = &[
    r"(?i)\bemergency\b",
    r"(?i)\bEM\b",
    r"(?i)\bself[-\s]?contained\b",
    r"(?i)\bbattery\s+backup\b",
    r"(?i)\b3\s*hr\b",
    r"(?i)\b3\s*hour\b",
];

const DIMMING_PATTERNS: &[&str] = &[
    r"(?i)\bdimmable\b",
    r"(?i)\bdimming\b",
    r"(?i)\bdim\b",
    r"(?i)\b1-10v\b",
    r"(?i)\b0-10v\b",
    r"(?i)\btriac\b",
    r"(?i)\bphase[-\s]?cut\b",
];

static RE_EMERGENCY: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(EMERGENCY_PATTERNS));
static RE_DIMMING: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(DIMMING_PATTERNS));
static RE_DALI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bDALI\b").expect("Invalid regex"));

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex"))
        .collect()
}

/// Specifications extracted from one line of text.
#[derive(Debug, Clone, Default)]
pub struct ParsedSpecs {
    pub wattage: Option<f64>,
    pub lumens: Option<f64>,
    pub ip_rating: Option<IpRating>,
    pub shape: Option<Shape>,
    pub environment: Environment,
    pub is_emergency: bool,
    pub is_dali: bool,
    pub is_dimming: bool,
    pub length_mm: Option<f64>,
    pub cct_k: Option<f64>,
    pub beam_deg: Option<f64>,
}

/// Extract all specifications from a description plus its side columns.
pub fn extract_specs(description: &str, side_values: &[String]) -> ParsedSpecs {
    let combined = if side_values.is_empty() {
        description.to_string()
    } else {
        format!("{} {}", description, side_values.join(" "))
    };
    let normalized = text::normalize(&combined);

    let mut specs = ParsedSpecs {
        wattage: extract_wattage(&combined),
        lumens: extract_lumens(&combined),
        ip_rating: IpRating::parse(&combined),
        environment: infer_environment(&normalized),
        ..Default::default()
    };

    // Unstated IP in a non-dry environment implies the environment's minimum.
    if specs.ip_rating.is_none() && specs.environment != Environment::DryIndoor {
        specs.ip_rating = Some(specs.environment.min_ip());
    }

    specs.shape = infer_shape(&normalized);
    specs.is_emergency = detect_emergency(&combined);
    specs.is_dali = detect_dali(&combined);
    specs.is_dimming = detect_dimming(&combined);
    specs.cct_k = extract_cct(&combined);
    specs.length_mm = extract_length(&combined);
    specs.beam_deg = extract_beam(&combined);

    specs
}

/// True when the watt token at `match_end` is a per-length form (`15W/m`),
/// which is not an absolute wattage.
fn is_per_length_form(combined: &str, match_end: usize) -> bool {
    combined[match_end..]
        .chars()
        .find(|ch| !ch.is_whitespace())
        .is_some_and(|ch| ch == '/')
}

/// First absolute wattage in the text; `W/m` forms are skipped.
pub fn extract_wattage(combined: &str) -> Option<f64> {
    for caps in RE_WATTAGE.captures_iter(combined) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if is_per_length_form(combined, whole.end()) {
            continue;
        }
        if let Ok(value) = caps[1].parse() {
            return Some(value);
        }
    }
    None
}

pub fn extract_lumens(combined: &str) -> Option<f64> {
    RE_LUMENS
        .captures(combined)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn extract_cct(combined: &str) -> Option<f64> {
    if let Some(caps) = RE_CCT_K.captures(combined) {
        if let Ok(value) = caps[1].parse() {
            return Some(value);
        }
    }
    RE_CCT_KELVIN
        .captures(combined)
        .and_then(|caps| caps[1].parse().ok())
}

/// Length in millimetres. A bare metre value below 10 is read as metres and
/// converted; larger bare values are taken as already-millimetre figures with
/// a stray `m` unit.
pub fn extract_length(combined: &str) -> Option<f64> {
    if let Some(caps) = RE_LENGTH_MM.captures(combined) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = RE_LENGTH_M.captures(combined) {
        let value: f64 = caps[1].parse().ok()?;
        return Some(if value < 10.0 { value * 1000.0 } else { value });
    }
    RE_LENGTH_L
        .captures(combined)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn extract_beam(combined: &str) -> Option<f64> {
    RE_BEAM
        .captures(combined)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn detect_emergency(combined: &str) -> bool {
    RE_EMERGENCY.iter().any(|regex| regex.is_match(combined))
}

pub fn detect_dali(combined: &str) -> bool {
    RE_DALI.is_match(combined)
}

pub fn detect_dimming(combined: &str) -> bool {
    RE_DIMMING.iter().any(|regex| regex.is_match(combined))
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
