#![allow(non_snake_case)]

use dioxus::prelude::*;

use catalog_common::types::CatalogItem;

use crate::state::ViewMode;

/// One catalog entry on the classic grid. URL-backed affordances only
/// render when the corresponding URL was derivable.
#[component]
pub fn CatalogCard(item: CatalogItem, view: ViewMode) -> Element {
    let has_actions = item.preview_url.is_some() || item.download_url.is_some();

    rsx! {
        div { class: "catalog-card",
            div { class: "catalog-card-cover",
                if let Some(thumbnail) = item.thumbnail.as_ref() {
                    img {
                        class: "catalog-card-thumb",
                        loading: "lazy",
                        alt: "{item.title}",
                        src: "{thumbnail}",
                    }
                }
            }

            div { class: "catalog-card-meta",
                h3 { class: "catalog-card-title", "{item.title}" }
                p { class: "catalog-card-brand", "{item.brand}" }

                if view == ViewMode::Details {
                    if let Some(description) = item.description.as_ref() {
                        p { class: "catalog-card-description", "{description}" }
                    }
                }
            }

            if view == ViewMode::Preview && has_actions {
                div { class: "catalog-card-actions",
                    if let Some(preview) = item.preview_url.as_ref() {
                        a {
                            class: "card-btn card-btn-secondary",
                            href: "{preview}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Preview {item.title}",
                            "Preview"
                        }
                    }
                    if let Some(download) = item.download_url.as_ref() {
                        a {
                            class: "card-btn card-btn-primary",
                            href: "{download}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Download {item.title}",
                            "Download"
                        }
                    }
                }
            }
        }
    }
}
