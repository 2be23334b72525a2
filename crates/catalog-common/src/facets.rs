//! Facet index derivation: the distinct brand and category values present in
//! a loaded catalog, in display order.

use std::collections::BTreeSet;

use crate::types::CatalogItem;

/// Universal facet sentinel meaning "no constraint".
pub const ALL: &str = "All";

/// Display priority for known categories. Categories outside this list sort
/// alphabetically after it.
pub const CATEGORY_ORDER: &[&str] = &[
    "Acrylic Laminates",
    "Solid Colour Laminates",
    "360 Louvers",
    "Decorative Laminates",
    "Doors",
    "Edge Banding",
    "Hardware",
    "Liners",
    "Louvers",
    "Mouldings",
    "PVC Laminates",
    "Thermo Laminates",
    "Veneers",
    "Wall Panels",
];

/// Sorted distinct brands, `All`-prefixed.
pub fn unique_brands(items: &[CatalogItem]) -> Vec<String> {
    let brands: BTreeSet<&str> = items.iter().map(|item| item.brand.as_str()).collect();
    let mut facet = Vec::with_capacity(brands.len() + 1);
    facet.push(ALL.to_string());
    facet.extend(brands.into_iter().map(str::to_string));
    facet
}

/// Distinct categories present in the data, `All`-prefixed: the
/// [`CATEGORY_ORDER`] priority entries first, then the rest alphabetically.
/// The result depends only on the set of categories, not on input order.
pub fn unique_categories(items: &[CatalogItem]) -> Vec<String> {
    let present: BTreeSet<&str> = items.iter().map(|item| item.category.as_str()).collect();

    let mut facet = Vec::with_capacity(present.len() + 1);
    facet.push(ALL.to_string());
    for &known in CATEGORY_ORDER {
        if present.contains(known) {
            facet.push(known.to_string());
        }
    }
    facet.extend(
        present
            .iter()
            .filter(|category| !CATEGORY_ORDER.contains(category))
            .map(|category| category.to_string()),
    );
    facet
}
