//! Columnar row reading for BOQ files.
//!
//! The contract is column names, not file format: any delimited text file
//! with a header row works. Delimiter is sniffed from a sample (tab, then
//! semicolon, else comma).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::types::EngineResult;

/// One row as ordered (header, value) pairs. Order is preserved so the
/// concatenation fallback reproduces the source column order.
pub type RowFields = Vec<(String, String)>;

/// Header names recognized as the description column, in priority order.
const DESCRIPTION_HEADERS: &[&str] = &[
    "description",
    "desc",
    "item",
    "item description",
    "product",
    "product description",
    "specification",
    "spec",
    "details",
    "name",
    "material",
    "material description",
];

/// Header names recognized as the quantity column, in priority order.
const QUANTITY_HEADERS: &[&str] = &["qty", "quantity", "count", "amount", "no", "units"];

/// Sniff the delimiter from a file sample.
fn sniff_delimiter(sample: &str) -> u8 {
    if sample.contains('\t') {
        b'\t'
    } else if sample.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Read all rows of a delimited file as ordered field lists.
pub fn read_rows(path: &Path) -> EngineResult<Vec<RowFields>> {
    let mut sample = String::new();
    File::open(path)?.take(2048).read_to_string(&mut sample)?;
    let delimiter = sniff_delimiter(&sample);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true) // tolerate rows with varying column counts
        .has_headers(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: RowFields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                (
                    header.clone(),
                    record.get(i).unwrap_or_default().to_string(),
                )
            })
            .collect();
        rows.push(fields);
    }

    Ok(rows)
}

/// Find the description field: exact header match first, then
/// case-insensitive, then " | "-concatenation of all non-empty fields.
pub fn find_description(fields: &RowFields) -> String {
    for key in DESCRIPTION_HEADERS {
        if let Some((_, value)) = fields.iter().find(|(header, _)| header == key) {
            if !value.trim().is_empty() {
                return value.trim().to_string();
            }
        }
    }

    for key in DESCRIPTION_HEADERS {
        if let Some((_, value)) = fields
            .iter()
            .find(|(header, _)| header.to_lowercase() == *key)
        {
            if !value.trim().is_empty() {
                return value.trim().to_string();
            }
        }
    }

    let parts: Vec<&str> = fields
        .iter()
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    parts.join(" | ")
}

/// Find the quantity field, defaulting to 1 when absent or non-numeric.
pub fn extract_quantity(fields: &RowFields) -> u32 {
    for key in QUANTITY_HEADERS {
        let exact = fields.iter().find(|(header, _)| header == key);
        let relaxed = fields
            .iter()
            .find(|(header, _)| header.to_lowercase() == *key);
        for (_, value) in exact.into_iter().chain(relaxed) {
            if let Ok(quantity) = value.trim().parse::<f64>() {
                if quantity >= 0.0 {
                    return quantity as u32;
                }
            }
        }
    }
    1
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
