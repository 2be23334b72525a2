#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::{ViewMode, BRAND_FILTER, CURRENT_PAGE, SEARCH_QUERY, VIEW_MODE};

/// Search input, brand selector, and view-mode selector for the classic
/// page. Every setter resets pagination.
#[component]
pub fn Toolbar(brands: Vec<String>) -> Element {
    let query = SEARCH_QUERY.read().clone();
    let brand = BRAND_FILTER.read().clone();
    let view = VIEW_MODE.read().clone();

    rsx! {
        div { class: "toolbar",
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search catalogs...",
                    value: "{query}",
                    oninput: move |e| {
                        *SEARCH_QUERY.write() = e.value();
                        *CURRENT_PAGE.write() = 1;
                    },
                }
                if !query.is_empty() {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            *SEARCH_QUERY.write() = String::new();
                            *CURRENT_PAGE.write() = 1;
                        },
                        "\u{00d7}"
                    }
                }
            }

            select {
                class: "toolbar-select",
                onchange: move |e| {
                    *BRAND_FILTER.write() = e.value();
                    *CURRENT_PAGE.write() = 1;
                },
                for brand_option in brands.iter() {
                    option {
                        value: "{brand_option}",
                        selected: *brand_option == brand,
                        "{brand_option}"
                    }
                }
            }

            select {
                class: "toolbar-select",
                onchange: move |e| {
                    *VIEW_MODE.write() = if e.value() == "Details" {
                        ViewMode::Details
                    } else {
                        ViewMode::Preview
                    };
                },
                option {
                    value: "Preview",
                    selected: view == ViewMode::Preview,
                    "Preview"
                }
                option {
                    value: "Details",
                    selected: view == ViewMode::Details,
                    "Details"
                }
            }
        }
    }
}
