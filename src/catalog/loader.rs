//! Catalog row parsing and exclusion rules.

use std::collections::BTreeMap;

use crate::boq::reader::RowFields;
use crate::catalog::shape_infer::infer_variant_shape;
use crate::models::ip::IpRating;
use crate::models::variant::Variant;

/// SKU prefixes marking derived pricing metadata, not purchasable variants.
const EXCLUDED_SKU_PREFIXES: &[&str] = &["CUSTOM", "READY", "IP40", "IP65"];

fn field<'a>(fields: &'a RowFields, key: &str) -> &'a str {
    fields
        .iter()
        .find(|(header, _)| header == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

/// Malformed or absent numerics are unset; the row still loads.
fn safe_float(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// True for rows that must not enter the catalog: pricing rules, missing
/// SKUs, and the excluded SKU prefixes.
pub fn is_excluded_row(fields: &RowFields) -> bool {
    if field(fields, "is_pricing_rule").trim().to_lowercase() == "true" {
        return true;
    }
    let sku = field(fields, "sku").trim();
    sku.is_empty()
        || EXCLUDED_SKU_PREFIXES
            .iter()
            .any(|prefix| sku.starts_with(prefix))
}

/// Parse one catalog row into a variant.
pub fn parse_variant_row(fields: &RowFields) -> Variant {
    let category = field(fields, "category").trim().to_string();
    let product_type = field(fields, "product_type").trim().to_string();
    let sku = field(fields, "sku").trim().to_string();
    let search_text = field(fields, "search_text").to_string();
    let dimming = field(fields, "dimming").trim().to_string();

    let sku_upper = sku.to_uppercase();
    let is_dali = sku_upper.contains("DALI") || dimming.to_uppercase().contains("DALI");
    let is_emergency =
        sku_upper.contains("EM") || search_text.to_uppercase().contains("EMERGENCY");

    let shape = infer_variant_shape(&category, &product_type, &sku, &search_text);

    let raw_fields: BTreeMap<String, String> = fields
        .iter()
        .map(|(header, value)| (header.clone(), value.clone()))
        .collect();

    Variant {
        row_id: field(fields, "row_id").trim().parse().unwrap_or(0),
        category,
        product_type,
        sku,
        price: safe_float(field(fields, "price")).unwrap_or(0.0),
        power_w: safe_float(field(fields, "power_w")),
        power_w_per_m: safe_float(field(fields, "power_w_per_m")),
        lumen: safe_float(field(fields, "lumen")),
        ip_rating: IpRating::parse(field(fields, "ip_rating")),
        length_mm: safe_float(field(fields, "length_mm")),
        width_mm: safe_float(field(fields, "width_mm")),
        height_mm: safe_float(field(fields, "height_mm")),
        diameter_mm: safe_float(field(fields, "diameter_mm")),
        dimming,
        cct_k: safe_float(field(fields, "cct_k")),
        beam_deg: safe_float(field(fields, "beam_deg")),
        shape,
        is_emergency,
        is_dali,
        search_text,
        raw_fields,
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
