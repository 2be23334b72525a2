#![allow(non_snake_case)]

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::state::{CATEGORY_FILTER, CURRENT_PAGE};

/// One pill per category facet value, with its live count under the current
/// search and brand constraints.
#[component]
pub fn CategoryTabs(categories: Vec<String>, counts: HashMap<String, usize>) -> Element {
    let selected = CATEGORY_FILTER.read().clone();

    rsx! {
        div { class: "category-tabs",
            for category in categories.iter() {
                {
                    let count = counts.get(category).copied().unwrap_or(0);
                    let class = if *category == selected {
                        "category-tab active"
                    } else {
                        "category-tab"
                    };
                    let value = category.clone();

                    rsx! {
                        button {
                            key: "{category}",
                            class: "{class}",
                            onclick: move |_| {
                                *CATEGORY_FILTER.write() = value.clone();
                                *CURRENT_PAGE.write() = 1;
                            },
                            "{category} "
                            span { class: "tab-count", "({count})" }
                        }
                    }
                }
            }
        }
    }
}
