//! Product catalog: variant storage plus read-only lookup indexes.

pub mod loader;
pub mod search;
pub mod shape_infer;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::boq::reader;
use crate::models::ip::IpRating;
use crate::models::shape::Shape;
use crate::models::variant::Variant;
use crate::types::EngineResult;

/// Width of one wattage index bucket, in watts.
const WATTAGE_BUCKET_W: f64 = 10.0;

/// The loaded catalog with its lookup indexes.
///
/// Indexes are rebuilt wholesale on every load and are read-only afterward;
/// once built, the catalog is safe for unlimited concurrent read-only use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    variants: Vec<Variant>,
    by_shape: BTreeMap<Shape, Vec<usize>>,
    by_ip: BTreeMap<String, Vec<usize>>,
    by_type: BTreeMap<String, Vec<usize>>,
    by_wattage_bucket: BTreeMap<u32, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from already-parsed variants.
    pub fn new(variants: Vec<Variant>) -> Self {
        let mut catalog = Self {
            variants,
            ..Default::default()
        };
        catalog.build_indexes();
        catalog
    }

    /// Load variants from a delimited file, dropping pricing-rule rows and
    /// excluded SKU prefixes before indexing.
    pub fn load_from_path(path: &Path) -> EngineResult<Self> {
        let rows = reader::read_rows(path)?;
        let total = rows.len();

        let variants: Vec<Variant> = rows
            .iter()
            .filter(|fields| !loader::is_excluded_row(fields))
            .map(|fields| loader::parse_variant_row(fields))
            .collect();

        log::info!(
            "Catalog loaded: {} variants ({} rows excluded)",
            variants.len(),
            total - variants.len()
        );

        Ok(Self::new(variants))
    }

    fn build_indexes(&mut self) {
        self.by_shape.clear();
        self.by_ip.clear();
        self.by_type.clear();
        self.by_wattage_bucket.clear();

        for (id, variant) in self.variants.iter().enumerate() {
            self.by_shape.entry(variant.shape).or_default().push(id);

            if let Some(ip) = &variant.ip_rating {
                self.by_ip.entry(ip.to_string()).or_default().push(id);
            }

            if !variant.product_type.is_empty() {
                self.by_type
                    .entry(variant.product_type.to_lowercase())
                    .or_default()
                    .push(id);
            }

            if let Some(power) = variant.power_w {
                self.by_wattage_bucket
                    .entry(wattage_bucket(power))
                    .or_default()
                    .push(id);
            }
        }
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant(&self, id: usize) -> &Variant {
        &self.variants[id]
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variant ids of one shape, in load order.
    pub fn by_shape(&self, shape: Shape) -> &[usize] {
        self.by_shape
            .get(&shape)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Variant ids carrying exactly this IP rating text.
    pub fn by_ip(&self, ip: &str) -> &[usize] {
        self.by_ip.get(ip).map(Vec::as_slice).unwrap_or_default()
    }

    /// Variant ids of one lowercased product type.
    pub fn by_type(&self, product_type: &str) -> &[usize] {
        self.by_type
            .get(&product_type.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Variant ids in one 10 W wattage bucket.
    pub fn by_wattage_bucket(&self, power_w: f64) -> &[usize] {
        self.by_wattage_bucket
            .get(&wattage_bucket(power_w))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All variant ids whose IP rating meets or exceeds `min_ip`, in load
    /// order. Variants without a rating never qualify.
    pub fn meeting_ip(&self, min_ip: &IpRating) -> Vec<usize> {
        self.variants
            .iter()
            .enumerate()
            .filter(|(_, variant)| {
                variant
                    .ip_rating
                    .as_ref()
                    .is_some_and(|ip| ip.meets(min_ip))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Distribution statistics for reporting.
    pub fn stats(&self) -> CatalogStats {
        let mut shapes: BTreeMap<String, usize> = BTreeMap::new();
        let mut ip_ratings: BTreeMap<String, usize> = BTreeMap::new();
        let mut wattage_bands: BTreeMap<String, usize> = BTreeMap::new();

        for variant in &self.variants {
            *shapes.entry(variant.shape.to_string()).or_default() += 1;

            if let Some(ip) = &variant.ip_rating {
                *ip_ratings.entry(ip.to_string()).or_default() += 1;
            }

            if let Some(power) = variant.power_w {
                *wattage_bands.entry(wattage_band(power).to_string()).or_default() += 1;
            }
        }

        CatalogStats {
            total_variants: self.variants.len(),
            shapes,
            ip_ratings,
            wattage_bands,
        }
    }
}

fn wattage_bucket(power_w: f64) -> u32 {
    ((power_w / WATTAGE_BUCKET_W).floor() * WATTAGE_BUCKET_W) as u32
}

fn wattage_band(power_w: f64) -> &'static str {
    if power_w <= 10.0 {
        "0-10W"
    } else if power_w <= 20.0 {
        "11-20W"
    } else if power_w <= 40.0 {
        "21-40W"
    } else if power_w <= 60.0 {
        "41-60W"
    } else {
        "60W+"
    }
}

/// Catalog distribution summary for the stats output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_variants: usize,
    pub shapes: BTreeMap<String, usize>,
    pub ip_ratings: BTreeMap<String, usize>,
    pub wattage_bands: BTreeMap<String, usize>,
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
