use serde::{Deserialize, Serialize};

/// One canonical catalog entry.
///
/// Produced once per data load by [`crate::record::normalize`] and never
/// mutated afterwards. Required text fields are non-empty (defaults fill
/// gaps during normalization); URL fields are either absolute URLs or
/// `None`, never partial strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
