//! Candidate funnel: an ordered list of widening stages.
//!
//! Each stage only ever widens the pool when the prior stage under-delivers,
//! and the final stage is unconditional, so a non-empty catalog always yields
//! a non-empty candidate set.

use std::collections::HashSet;

use crate::catalog::{search, Catalog};
use crate::models::boq::BoqItem;
use crate::models::ip::IpRating;
use crate::models::shape::{seed_compatible_shapes, Shape};

/// Below this many shape-and-IP candidates, the pool is widened with
/// IP-qualifying variants of any shape.
pub const MIN_SHAPE_POOL: usize = 10;
/// How many IP-qualifying variants the widening step may add.
pub const IP_WIDEN_CAP: usize = 50;
/// Result cap for the free-text fallback search.
pub const TEXT_SEARCH_CAP: usize = 50;
/// Unconditional final fallback: the first N loaded variants.
pub const HEAD_FALLBACK_CAP: usize = 200;

/// The IP rating the item effectively requires: explicit, else the
/// environment minimum (dry indoor yields IP20).
pub fn required_ip(item: &BoqItem) -> IpRating {
    item.requested_ip
        .clone()
        .unwrap_or_else(|| item.environment.min_ip())
}

/// Stage 1: seed from the requested shape's index plus its compatible
/// shapes. An unset or unknown shape seeds nothing (the IP stage then starts
/// from the full variant set).
pub fn seed_by_shape(item: &BoqItem, catalog: &Catalog) -> Vec<usize> {
    let Some(shape) = item.requested_shape else {
        return Vec::new();
    };
    if shape == Shape::Unknown {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut seeded = Vec::new();
    for id in catalog.by_shape(shape) {
        if seen.insert(*id) {
            seeded.push(*id);
        }
    }
    for compatible in seed_compatible_shapes(shape) {
        for id in catalog.by_shape(*compatible) {
            if seen.insert(*id) {
                seeded.push(*id);
            }
        }
    }
    seeded
}

/// Stage 2: intersect the shape seed with the IP-qualifying set; widen with
/// up to [`IP_WIDEN_CAP`] IP-qualifying variants of any shape when the
/// intersection is thin. An empty seed means the IP-qualifying set itself.
pub fn refine_by_ip(seeded: &[usize], ip_qualifying: &[usize]) -> Vec<usize> {
    if seeded.is_empty() {
        return ip_qualifying.to_vec();
    }

    let qualifying: HashSet<usize> = ip_qualifying.iter().copied().collect();
    let mut pool: Vec<usize> = seeded
        .iter()
        .copied()
        .filter(|id| qualifying.contains(id))
        .collect();

    if pool.len() < MIN_SHAPE_POOL {
        let seen: HashSet<usize> = pool.iter().copied().collect();
        pool.extend(
            ip_qualifying
                .iter()
                .take(IP_WIDEN_CAP)
                .copied()
                .filter(|id| !seen.contains(id)),
        );
    }
    pool
}

/// Stage 3: free-text relevance over the catalog's search/category/SKU
/// fields.
pub fn text_fallback(item: &BoqItem, catalog: &Catalog) -> Vec<usize> {
    if item.raw_description.trim().is_empty() {
        return Vec::new();
    }
    search::search_text(catalog, &item.raw_description, TEXT_SEARCH_CAP)
}

/// Stage 4: the first [`HEAD_FALLBACK_CAP`] loaded variants, unconditionally.
pub fn head_fallback(catalog: &Catalog) -> Vec<usize> {
    (0..catalog.len().min(HEAD_FALLBACK_CAP)).collect()
}

/// Run the funnel. Given a non-empty catalog the result is never empty.
pub fn generate_candidates(item: &BoqItem, catalog: &Catalog) -> Vec<usize> {
    let ip_qualifying = catalog.meeting_ip(&required_ip(item));

    let seeded = seed_by_shape(item, catalog);
    let mut pool = refine_by_ip(&seeded, &ip_qualifying);

    if pool.is_empty() {
        pool = text_fallback(item, catalog);
        if !pool.is_empty() {
            log::debug!(
                "Row {}: funnel fell back to text search ({} candidates)",
                item.row_number,
                pool.len()
            );
        }
    }
    if pool.is_empty() {
        pool = head_fallback(catalog);
        log::debug!(
            "Row {}: funnel fell back to catalog head ({} candidates)",
            item.row_number,
            pool.len()
        );
    }
    pool
}

#[cfg(test)]
#[path = "tests/candidates_tests.rs"]
mod tests;
