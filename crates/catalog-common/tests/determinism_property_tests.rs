use proptest::prelude::*;

use catalog_common::drive;
use catalog_common::facets;
use catalog_common::filter::{self, FilterParams};
use catalog_common::paging;
use catalog_common::types::CatalogItem;

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    let brands = prop::sample::select(vec!["Hinch", "ACRYGOLD", "Laica Decor", "Euro Pathik"]);
    let categories = prop::sample::select(vec![
        "Doors",
        "Hardware",
        "Louvers",
        "Acrylic Laminates",
        "Custom Panels",
    ]);
    ("[a-zA-Z0-9 ]{0,16}", brands, categories).prop_map(|(title, brand, category)| CatalogItem {
        id: format!("{brand}-{title}"),
        title,
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: None,
        preview_url: None,
        download_url: None,
        description: None,
    })
}

proptest! {
    #[test]
    fn drive_derivations_never_panic(link in ".*") {
        let _ = drive::extract_drive_id(&link);
        let _ = drive::preview_url(&link);
        let _ = drive::download_url(&link);
        let _ = drive::thumb_url(&link);
    }

    #[test]
    fn drive_derivations_are_idempotent(id in "[A-Za-z0-9_-]{5,40}") {
        let link = format!("https://drive.google.com/file/d/{id}/view");
        let preview = drive::preview_url(&link).unwrap();
        let download = drive::download_url(&link).unwrap();
        prop_assert_eq!(drive::preview_url(&preview), Some(preview.clone()));
        prop_assert_eq!(drive::download_url(&download), Some(download.clone()));
        let extracted = drive::extract_drive_id(&preview);
        prop_assert_eq!(extracted.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn facet_order_ignores_input_order(items in prop::collection::vec(arb_item(), 0..40)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(facets::unique_brands(&reversed), facets::unique_brands(&items));
        prop_assert_eq!(facets::unique_categories(&reversed), facets::unique_categories(&items));
    }

    #[test]
    fn counts_agree_with_filter(
        items in prop::collection::vec(arb_item(), 0..40),
        search in "[a-zA-Z0-9]{0,3}",
        brand_pick in any::<prop::sample::Index>(),
    ) {
        let brands = facets::unique_brands(&items);
        let brand = brands[brand_pick.index(brands.len())].clone();
        let categories = facets::unique_categories(&items);
        let counts = filter::category_counts(&items, &categories, &search, &brand);
        for category in &categories {
            let params = FilterParams {
                search: search.clone(),
                brand: brand.clone(),
                category: category.clone(),
            };
            prop_assert_eq!(
                filter::filter(&items, &params).len(),
                counts[category.as_str()],
                "facet {}", category
            );
        }
    }

    #[test]
    fn filtering_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..40),
        search in "[a-zA-Z0-9]{0,3}",
    ) {
        let params = FilterParams {
            search,
            ..FilterParams::default()
        };
        let once: Vec<CatalogItem> =
            filter::filter(&items, &params).into_iter().cloned().collect();
        let twice: Vec<CatalogItem> =
            filter::filter(&once, &params).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn page_window_invariants(
        total in 0usize..500,
        page in 0usize..50,
        per_page in 1usize..50,
    ) {
        let window = paging::page_of(total, page, per_page);
        prop_assert!(window.page >= 1);
        prop_assert!(window.page <= window.total_pages);
        prop_assert!(window.start <= window.end);
        prop_assert!(window.end <= total);
        prop_assert!(window.end - window.start <= per_page);
    }
}
