//! Canonical shape categories and keyword-based shape inference.

use serde::{Deserialize, Serialize};

/// Canonical physical form of a lighting variant.
///
/// Reconciles inconsistent vendor/category naming onto a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Round,
    Linear,
    Square,
    Rectangular,
    Track,
    Flood,
    Street,
    HighBay,
    Spot,
    Wall,
    Cylinder,
    Adjustable,
    Decorative,
    Exit,
    Unknown,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Round => "round",
            Shape::Linear => "linear",
            Shape::Square => "square",
            Shape::Rectangular => "rectangular",
            Shape::Track => "track",
            Shape::Flood => "flood",
            Shape::Street => "street",
            Shape::HighBay => "high_bay",
            Shape::Spot => "spot",
            Shape::Wall => "wall",
            Shape::Cylinder => "cylinder",
            Shape::Adjustable => "adjustable",
            Shape::Decorative => "decorative",
            Shape::Exit => "exit",
            Shape::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Keyword table in enumeration order. Order matters: keyword-score ties
/// break toward the earlier entry.
pub const SHAPE_KEYWORDS: &[(Shape, &[&str])] = &[
    (
        Shape::Round,
        &[
            "round", "circular", "circle", "globe", "disk", "disc", "downlight", "down light",
            "recessed", "spot",
        ],
    ),
    (
        Shape::Linear,
        &[
            "linear",
            "batten",
            "strip",
            "profile",
            "tube",
            "line",
            "trunking",
            "continuous",
            "pendant linear",
            "suspended linear",
            "led bar",
            "light bar",
        ],
    ),
    (
        Shape::Square,
        &[
            "square",
            "panel 6060",
            "600x600",
            "60x60",
            "595x595",
            "square panel",
        ],
    ),
    (
        Shape::Rectangular,
        &[
            "rectangular",
            "panel 60120",
            "600x1200",
            "60x120",
            "1200x600",
            "rectangle",
            "30x120",
            "300x1200",
        ],
    ),
    (Shape::Track, &["track", "rail", "magnetic track"]),
    (
        Shape::Flood,
        &["flood", "floodlight", "flood light", "area light"],
    ),
    (
        Shape::Street,
        &["street", "road", "highway", "pathway light", "street light"],
    ),
    (
        Shape::HighBay,
        &[
            "high bay",
            "highbay",
            "high-bay",
            "warehouse light",
            "industrial bay",
        ],
    ),
    (
        Shape::Spot,
        &["spot", "spotlight", "spot light", "mr16", "gu10", "accent"],
    ),
    (
        Shape::Wall,
        &[
            "wall",
            "sconce",
            "wall light",
            "wall mount",
            "wall-mounted",
            "bulkhead",
            "uplight",
            "up-light",
        ],
    ),
    (
        Shape::Cylinder,
        &[
            "cylinder",
            "cylindrical",
            "pendant cylinder",
            "surface cylinder",
        ],
    ),
    (
        Shape::Adjustable,
        &["adjustable", "gimbal", "tilt", "rotatable", "directional"],
    ),
    (
        Shape::Exit,
        &["exit", "emergency exit", "exit sign", "evacuation"],
    ),
];

/// Shapes scored as acceptable substitutes for a requested shape.
pub const SHAPE_COMPATIBILITY: &[(Shape, &[Shape])] = &[
    (Shape::Round, &[Shape::Cylinder, Shape::Adjustable]),
    (Shape::Linear, &[Shape::Rectangular]),
    (Shape::Spot, &[Shape::Adjustable, Shape::Track]),
    (Shape::Square, &[Shape::Rectangular]),
    (Shape::Rectangular, &[Shape::Square, Shape::Linear]),
];

/// Compatible substitutes for `shape` per [`SHAPE_COMPATIBILITY`].
pub fn compatible_shapes(shape: Shape) -> &'static [Shape] {
    SHAPE_COMPATIBILITY
        .iter()
        .find(|(requested, _)| *requested == shape)
        .map(|(_, compatible)| *compatible)
        .unwrap_or(&[])
}

/// Candidate-generation compatibility: the funnel widens a requested shape
/// with these, but does not widen `rectangular` (scoring-only entry).
pub fn seed_compatible_shapes(shape: Shape) -> &'static [Shape] {
    match shape {
        Shape::Rectangular => &[],
        other => compatible_shapes(other),
    }
}

/// Infer a shape from normalized text by keyword scoring.
///
/// Every keyword found as a substring contributes its word count, so
/// multi-word keywords outweigh single words ("flood light" beats "light
/// bar"'s single hits). Ties break toward the earlier table entry; no hit
/// means no inference.
pub fn infer_shape(normalized_text: &str) -> Option<Shape> {
    let mut best: Option<(Shape, usize)> = None;

    for (shape, keywords) in SHAPE_KEYWORDS {
        let score: usize = keywords
            .iter()
            .filter(|keyword| normalized_text.contains(*keyword))
            .map(|keyword| keyword.split_whitespace().count())
            .sum();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((*shape, score)),
        }
    }

    best.map(|(shape, _)| shape)
}

#[cfg(test)]
#[path = "tests/shape_tests.rs"]
mod tests;
