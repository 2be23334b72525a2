use catalog_common::facets::{unique_categories, ALL};
use catalog_common::filter::{category_counts, filter, FilterParams};
use catalog_common::types::CatalogItem;

fn item(title: &str, brand: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id: format!("{brand}-{title}"),
        title: title.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: None,
        preview_url: None,
        download_url: None,
        description: None,
    }
}

fn sample() -> Vec<CatalogItem> {
    vec![
        item("Oak Flush Door", "Hinch", "Doors"),
        item("Walnut Panel Door", "Laica Decor", "Doors"),
        item("Brass Handle Set", "Hinch", "Hardware"),
        item("Matte Laminate", "ACRYGOLD", "Acrylic Laminates"),
    ]
}

fn params(search: &str, brand: &str, category: &str) -> FilterParams {
    FilterParams {
        search: search.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
    }
}

#[test]
fn default_params_match_everything() {
    let items = sample();
    assert_eq!(filter(&items, &FilterParams::default()).len(), items.len());
}

#[test]
fn search_is_case_insensitive_and_title_only() {
    let items = sample();
    let matched = filter(&items, &params("DOOR", ALL, ALL));
    assert_eq!(matched.len(), 2);
    // "Doors" appears as a category and brand substrings elsewhere; only
    // titles participate in the search.
    let matched = filter(&items, &params("hinch", ALL, ALL));
    assert!(matched.is_empty());
}

#[test]
fn brand_filter_is_exact() {
    let items = sample();
    let matched = filter(&items, &params("", "Hinch", ALL));
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|item| item.brand == "Hinch"));
}

#[test]
fn predicates_combine_as_conjunction() {
    let items = sample();
    let matched = filter(&items, &params("door", "Hinch", "Doors"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Oak Flush Door");
}

#[test]
fn filtering_preserves_input_order() {
    let items = sample();
    let matched = filter(&items, &params("", ALL, "Doors"));
    let titles: Vec<&str> = matched.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Oak Flush Door", "Walnut Panel Door"]);
}

#[test]
fn filtering_is_idempotent() {
    let items = sample();
    let p = params("door", ALL, ALL);
    let once: Vec<CatalogItem> = filter(&items, &p).into_iter().cloned().collect();
    let twice: Vec<CatalogItem> = filter(&once, &p).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

#[test]
fn counts_cover_every_facet_value() {
    let items = vec![
        item("a", "X", "Doors"),
        item("b", "X", "Doors"),
        item("c", "X", "Hardware"),
    ];
    let categories = unique_categories(&items);
    let counts = category_counts(&items, &categories, "", ALL);
    assert_eq!(counts[ALL], 3);
    assert_eq!(counts["Doors"], 2);
    assert_eq!(counts["Hardware"], 1);
}

#[test]
fn counts_respect_search_and_brand_but_not_category() {
    let items = sample();
    let categories = unique_categories(&items);
    let counts = category_counts(&items, &categories, "door", "Hinch");
    assert_eq!(counts[ALL], 1);
    assert_eq!(counts["Doors"], 1);
    assert_eq!(counts["Hardware"], 0);
    assert_eq!(counts["Acrylic Laminates"], 0);
}

#[test]
fn counts_agree_with_filter_lengths() {
    let items = sample();
    let categories = unique_categories(&items);
    let counts = category_counts(&items, &categories, "a", ALL);
    for category in &categories {
        let matched = filter(&items, &params("a", ALL, category));
        assert_eq!(matched.len(), counts[category.as_str()], "facet {category}");
    }
}
