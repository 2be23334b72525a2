#![allow(non_snake_case)]

use dioxus::prelude::*;

use catalog_common::facets;
use catalog_common::filter::{self, FilterParams};
use catalog_common::paging;
use catalog_common::types::CatalogItem;

use super::catalog_card::CatalogCard;
use super::category_tabs::CategoryTabs;
use super::plural;
use super::toolbar::Toolbar;
use crate::state::{BRAND_FILTER, CATALOG, CATEGORY_FILTER, CURRENT_PAGE, SEARCH_QUERY, VIEW_MODE};

const CARDS_PER_PAGE: usize = 24;

/// The classic page: toolbar, category tabs, and the paginated card grid.
/// Facets, counts, and the filtered window are re-derived from scratch on
/// every render.
#[component]
pub fn CatalogsPage() -> Element {
    let catalog = CATALOG.read();
    let search = SEARCH_QUERY.read().clone();
    let brand = BRAND_FILTER.read().clone();
    let category = CATEGORY_FILTER.read().clone();
    let view = VIEW_MODE.read().clone();
    let requested_page = *CURRENT_PAGE.read();

    let brands = facets::unique_brands(&catalog);
    let categories = facets::unique_categories(&catalog);
    let counts = filter::category_counts(&catalog, &categories, &search, &brand);

    let params = FilterParams {
        search,
        brand,
        category,
    };
    let matches = filter::filter(&catalog, &params);
    let match_count = matches.len();
    let window = paging::page_of(match_count, requested_page, CARDS_PER_PAGE);
    let visible: Vec<CatalogItem> = matches[window.start..window.end]
        .iter()
        .map(|item| (*item).clone())
        .collect();
    let last_page = window.total_pages;

    rsx! {
        div { class: "catalogs-page",
            Toolbar { brands }
            CategoryTabs { categories, counts }

            if match_count == 0 {
                div { class: "directory-empty",
                    p { "No catalogs found." }
                    p { class: "text-secondary",
                        "Try adjusting your search terms or filters."
                    }
                }
            } else {
                div { class: "result-count",
                    "{match_count} catalog{plural(match_count)}"
                }

                div { class: "catalog-grid",
                    for item in visible.iter() {
                        CatalogCard {
                            key: "{item.id}",
                            item: item.clone(),
                            view: view.clone(),
                        }
                    }
                }

                if window.total_pages > 1 {
                    div { class: "pager",
                        button {
                            class: "pager-btn",
                            disabled: window.page == 1,
                            onclick: move |_| {
                                let current = *CURRENT_PAGE.read();
                                *CURRENT_PAGE.write() = current.saturating_sub(1).max(1);
                            },
                            "Previous"
                        }
                        span { class: "pager-status",
                            "Page {window.page} of {window.total_pages}"
                        }
                        button {
                            class: "pager-btn",
                            disabled: window.page == window.total_pages,
                            onclick: move |_| {
                                let current = *CURRENT_PAGE.read();
                                *CURRENT_PAGE.write() = (current + 1).min(last_page);
                            },
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
