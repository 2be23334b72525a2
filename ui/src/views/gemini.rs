#![allow(non_snake_case)]

use dioxus::prelude::*;

use catalog_common::facets::{self, ALL};
use catalog_common::filter::{self, FilterParams};
use catalog_common::types::CatalogItem;

use crate::state::{CATALOG, CATEGORY_FILTER, SEARCH_QUERY};

/// The Gemini-themed variant: hero section, category filter pills, and an
/// unpaginated grid. Brand is unconstrained here; only search and category
/// apply.
#[component]
pub fn GeminiPage() -> Element {
    let catalog = CATALOG.read();
    let search = SEARCH_QUERY.read().clone();
    let selected = CATEGORY_FILTER.read().clone();

    let categories = facets::unique_categories(&catalog);
    let counts = filter::category_counts(&catalog, &categories, &search, ALL);

    let params = FilterParams {
        search: search.clone(),
        brand: ALL.to_string(),
        category: selected.clone(),
    };
    let visible: Vec<CatalogItem> = filter::filter(&catalog, &params)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "gemini-page",
            section { class: "gemini-hero",
                h1 { class: "gemini-hero-title", "Curated Spaces, Inspired Living." }
                p { class: "gemini-hero-subtitle",
                    "Discover our collection of catalogs, each a sourcebook for timeless and modern design."
                }
            }

            section { class: "gemini-collections",
                div { class: "gemini-section-heading",
                    h2 { "Collections" }
                    p { "A glimpse into our world of design and craftsmanship." }
                }

                div { class: "gemini-controls",
                    div { class: "gemini-filter-pills",
                        for category in categories.iter() {
                            {
                                let count = counts.get(category).copied().unwrap_or(0);
                                let class = if *category == selected {
                                    "gemini-pill active"
                                } else {
                                    "gemini-pill"
                                };
                                let value = category.clone();

                                rsx! {
                                    button {
                                        key: "{category}",
                                        class: "{class}",
                                        onclick: move |_| {
                                            *CATEGORY_FILTER.write() = value.clone();
                                        },
                                        "{category} ({count})"
                                    }
                                }
                            }
                        }
                    }
                    input {
                        class: "gemini-search",
                        r#type: "text",
                        placeholder: "Search catalogs...",
                        value: "{search}",
                        oninput: move |e| {
                            *SEARCH_QUERY.write() = e.value();
                        },
                    }
                }

                if visible.is_empty() {
                    p { class: "gemini-empty", "No catalogs found." }
                } else {
                    div { class: "gemini-grid",
                        for item in visible.iter() {
                            GeminiCard { key: "{item.id}", item: item.clone() }
                        }
                    }
                }
            }

            footer { class: "gemini-footer",
                h3 { "HINCH" }
                p { "Designing the future of living spaces." }
            }
        }
    }
}

#[component]
fn GeminiCard(item: CatalogItem) -> Element {
    rsx! {
        div { class: "gemini-card",
            if let Some(thumbnail) = item.thumbnail.as_ref() {
                img {
                    class: "gemini-card-thumb",
                    loading: "lazy",
                    alt: "{item.title}",
                    src: "{thumbnail}",
                }
            } else {
                div { class: "gemini-card-placeholder",
                    span { "No Preview" }
                }
            }

            div { class: "gemini-card-body",
                h3 { class: "gemini-card-title", "{item.title}" }
                p { class: "gemini-card-line", "{item.brand}" }
                p { class: "gemini-card-line", "{item.category}" }
                if let Some(description) = item.description.as_ref() {
                    p { class: "gemini-card-description", "{description}" }
                }

                div { class: "gemini-card-actions",
                    if let Some(preview) = item.preview_url.as_ref() {
                        a {
                            class: "card-btn card-btn-secondary",
                            href: "{preview}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Preview"
                        }
                    }
                    if let Some(download) = item.download_url.as_ref() {
                        a {
                            class: "card-btn card-btn-primary",
                            href: "{download}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Download"
                        }
                    }
                }
            }
        }
    }
}
