//! IP (Ingress Protection) rating value type.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Compiled regex for `IP65`, `ip 44`, etc.
static RE_IP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)IP\s*(\d)(\d)").expect("Invalid regex"));

/// An Ingress Protection rating: two independent ordinal scales.
///
/// The solid digit (0-6) and liquid digit (0-9) are compared independently by
/// [`IpRating::meets`]; `numeric_value` exists only for the scorer's penalty
/// gap, which treats the two digits as one combined integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRating {
    /// First digit: protection against solid particles (0-6).
    pub solid: u8,
    /// Second digit: protection against liquids (0-9).
    pub liquid: u8,
    /// Original text the rating was parsed from.
    pub raw: String,
}

impl IpRating {
    pub fn new(solid: u8, liquid: u8) -> Self {
        Self {
            solid,
            liquid,
            raw: format!("IP{solid}{liquid}"),
        }
    }

    /// Parse the first `IP<d><d>` occurrence in `text`. Returns `None` when
    /// no rating is stated; absence is "not stated", never IP00.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = RE_IP.captures(text)?;
        let solid = caps[1].parse().ok()?;
        let liquid = caps[2].parse().ok()?;
        Some(Self {
            solid,
            liquid,
            raw: caps[0].to_string(),
        })
    }

    /// Combined two-digit value (IP65 -> 65). Only meaningful for the
    /// scorer's penalty tiers; ordering the scales jointly is lossy.
    pub fn numeric_value(&self) -> u8 {
        self.solid * 10 + self.liquid
    }

    /// True iff both digits meet or exceed `required`'s corresponding digits.
    pub fn meets(&self, required: &IpRating) -> bool {
        self.solid >= required.solid && self.liquid >= required.liquid
    }
}

impl std::fmt::Display for IpRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IP{}{}", self.solid, self.liquid)
    }
}

#[cfg(test)]
#[path = "tests/ip_tests.rs"]
mod tests;
