//! The filter/count engine.
//!
//! Pure recomputation: both functions re-derive their result from the full
//! list on every call. Filtering preserves input order.

use std::collections::HashMap;

use crate::facets::ALL;
use crate::types::CatalogItem;

/// Current user-controlled predicates. `All` for brand or category means no
/// constraint; the search matches titles case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterParams {
    pub search: String,
    pub brand: String,
    pub category: String,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            brand: ALL.to_string(),
            category: ALL.to_string(),
        }
    }
}

fn matches_search(item: &CatalogItem, needle_lower: &str) -> bool {
    needle_lower.is_empty() || item.title.to_lowercase().contains(needle_lower)
}

fn matches_facet(value: &str, selected: &str) -> bool {
    selected == ALL || value == selected
}

/// Items satisfying all three predicates, in input order.
pub fn filter<'a>(items: &'a [CatalogItem], params: &FilterParams) -> Vec<&'a CatalogItem> {
    let needle = params.search.to_lowercase();
    items
        .iter()
        .filter(|item| {
            matches_search(item, &needle)
                && matches_facet(&item.brand, &params.brand)
                && matches_facet(&item.category, &params.category)
        })
        .collect()
}

/// Per-facet-value counts under the current search and brand constraints.
///
/// Each category entry counts items matching search+brand within that
/// category; the `All` entry counts search+brand matches with no category
/// constraint. Facet values absent from `categories` are not counted.
pub fn category_counts(
    items: &[CatalogItem],
    categories: &[String],
    search: &str,
    brand: &str,
) -> HashMap<String, usize> {
    let needle = search.to_lowercase();
    let mut counts: HashMap<String, usize> = categories
        .iter()
        .map(|category| (category.clone(), 0))
        .collect();

    for item in items {
        if !(matches_search(item, &needle) && matches_facet(&item.brand, brand)) {
            continue;
        }
        if let Some(count) = counts.get_mut(ALL) {
            *count += 1;
        }
        if let Some(count) = counts.get_mut(&item.category) {
            *count += 1;
        }
    }
    counts
}
