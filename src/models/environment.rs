//! Installation environment contexts and their minimum IP requirements.

use serde::{Deserialize, Serialize};

use crate::models::ip::IpRating;

/// Installation context inferred from a requirement line.
///
/// Drives the minimum acceptable IP rating when none is stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Environment {
    DryIndoor,
    DampIndoor,
    WetIndoor,
    CoveredOutdoor,
    ExposedOutdoor,
    Industrial,
    Hazardous,
    Submersible,
}

impl Environment {
    /// Minimum IP rating acceptable for this environment.
    pub fn min_ip(&self) -> IpRating {
        match self {
            Environment::DryIndoor => IpRating::new(2, 0),
            Environment::DampIndoor => IpRating::new(4, 4),
            Environment::WetIndoor => IpRating::new(6, 5),
            Environment::CoveredOutdoor => IpRating::new(4, 4),
            Environment::ExposedOutdoor => IpRating::new(6, 5),
            Environment::Industrial => IpRating::new(6, 5),
            Environment::Hazardous => IpRating::new(6, 6),
            Environment::Submersible => IpRating::new(6, 8),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::DryIndoor
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::DryIndoor => "indoor dry",
            Environment::DampIndoor => "indoor damp",
            Environment::WetIndoor => "indoor wet",
            Environment::CoveredOutdoor => "outdoor covered",
            Environment::ExposedOutdoor => "outdoor exposed",
            Environment::Industrial => "industrial",
            Environment::Hazardous => "hazardous",
            Environment::Submersible => "submersible",
        };
        write!(f, "{name}")
    }
}

/// Keyword table in detection order. The first environment with any keyword
/// hit wins, so order is part of the contract.
pub const ENVIRONMENT_KEYWORDS: &[(Environment, &[&str])] = &[
    (
        Environment::WetIndoor,
        &[
            "wet",
            "shower",
            "steam",
            "sauna",
            "pool",
            "spa",
            "wet room",
            "wet-room",
            "wetroom",
            "water spray",
        ],
    ),
    (
        Environment::DampIndoor,
        &[
            "bathroom", "toilet", "wc", "washroom", "kitchen", "laundry", "damp", "humid",
            "moisture", "utility",
        ],
    ),
    (
        Environment::ExposedOutdoor,
        &[
            "outdoor",
            "exterior",
            "external",
            "outside",
            "garden",
            "parking",
            "car park",
            "carpark",
            "street",
            "pathway",
            "landscape",
            "facade",
            "weatherproof",
            "all-weather",
        ],
    ),
    (
        Environment::CoveredOutdoor,
        &[
            "canopy", "covered", "porch", "awning", "shelter", "carport", "veranda", "balcony",
            "terrace",
        ],
    ),
    (
        Environment::Industrial,
        &[
            "industrial",
            "factory",
            "warehouse",
            "workshop",
            "plant",
            "manufacturing",
            "production",
            "clean room",
            "cleanroom",
        ],
    ),
    (
        Environment::Hazardous,
        &[
            "hazardous",
            "explosive",
            "flammable",
            "chemical",
            "atex",
            "zone 1",
            "zone 2",
            "petrol",
            "gas station",
        ],
    ),
    (
        Environment::Submersible,
        &[
            "underwater",
            "submersible",
            "submerged",
            "fountain",
            "pond",
            "aquarium",
            "swimming pool light",
        ],
    ),
];

/// Infer the environment from normalized text: first table entry with a
/// substring hit, defaulting to dry indoor.
pub fn infer_environment(normalized_text: &str) -> Environment {
    for (environment, keywords) in ENVIRONMENT_KEYWORDS {
        if keywords
            .iter()
            .any(|keyword| normalized_text.contains(*keyword))
        {
            return *environment;
        }
    }
    Environment::DryIndoor
}

#[cfg(test)]
#[path = "tests/environment_tests.rs"]
mod tests;
