//! Raw record normalization.
//!
//! The catalog data has accumulated several source schemas over time:
//! spreadsheet exports with human column headers (including a trailing-space
//! header and a misspelled link column), underscore-separated exports, and a
//! hand-edited file with camelCase fields. All of them funnel through
//! [`RawRecord`], whose serde aliases are the mapping table from legacy
//! column names to canonical fields.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::drive;
use crate::types::CatalogItem;

pub const DEFAULT_TITLE: &str = "Untitled Catalog";
pub const DEFAULT_BRAND: &str = "Unknown Brand";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One record in any of the historical source schemas. Every field is
/// optional; gaps are filled with defaults during normalization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(
        default,
        alias = "Catalogues Name",
        alias = "Catalogues Name ",
        alias = "Catalogues_Name"
    )]
    pub name: Option<String>,
    #[serde(default, alias = "Brand", alias = "Brands")]
    pub brand: Option<String>,
    #[serde(default, alias = "Category")]
    pub category: Option<String>,
    #[serde(
        default,
        rename = "driveLink",
        alias = "Catalouge links",
        alias = "Catalogues Links",
        alias = "Catalogues_Links"
    )]
    pub drive_link: Option<String>,
    #[serde(default, rename = "uniqueId")]
    pub unique_id: Option<String>,
}

/// A raw source document: either a flat array of records, or a per-category
/// export keyed by category name. In the keyed shape the key supplies the
/// category for records that lack one of their own.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    Flat(Vec<Value>),
    ByCategory(BTreeMap<String, Vec<Value>>),
}

/// A document that is not valid JSON or matches neither known shape.
#[derive(Debug, Error)]
#[error("malformed catalog document: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parse one source document into raw records.
///
/// Individual records that fail to deserialize degrade to the all-defaults
/// record; only a document-level parse failure is an error.
pub fn parse_document(text: &str) -> Result<Vec<RawRecord>, ParseError> {
    let document: RawDocument = serde_json::from_str(text)?;
    Ok(match document {
        RawDocument::Flat(values) => values.into_iter().map(raw_from_value).collect(),
        RawDocument::ByCategory(groups) => groups
            .into_iter()
            .flat_map(|(category, values)| {
                values.into_iter().map(move |value| {
                    let mut record = raw_from_value(value);
                    if record.category.is_none() {
                        record.category = Some(category.clone());
                    }
                    record
                })
            })
            .collect(),
    })
}

fn raw_from_value(value: Value) -> RawRecord {
    serde_json::from_value(value).unwrap_or_default()
}

/// Normalize raw records into canonical items: trimmed fields, defaults for
/// gaps, positional fallback ids, and derived Drive URLs.
pub fn normalize(records: Vec<RawRecord>) -> Vec<CatalogItem> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize_one(record, index))
        .collect()
}

/// Normalize a single record. `index` is the record's position in the loaded
/// list, used as the fallback id when the source has no explicit one.
pub fn normalize_one(record: RawRecord, index: usize) -> CatalogItem {
    let title = clean(record.name).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let brand = clean(record.brand).unwrap_or_else(|| DEFAULT_BRAND.to_string());
    let category = clean(record.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let id = clean(record.unique_id).unwrap_or_else(|| format!("catalog-{index}"));
    let link = clean(record.drive_link).unwrap_or_default();

    let description = format!(
        "Explore our comprehensive {category} collection from {brand}. \
         This catalog showcases premium materials and finishes for modern interior design."
    );

    CatalogItem {
        id,
        thumbnail: drive::thumb_url(&link),
        preview_url: drive::preview_url(&link),
        download_url: drive::download_url(&link),
        description: Some(description),
        title,
        brand,
        category,
    }
}

/// Whitespace-only values count as missing.
fn clean(field: Option<String>) -> Option<String> {
    field.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
