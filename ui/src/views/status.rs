#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::APP_CONFIG;

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "status-panel",
            p { "Loading catalogs..." }
            p { class: "text-secondary", "This may take a moment." }
        }
    }
}

/// Shown when the whole load failed. Retrying is a full reload of the
/// configured source set.
#[component]
pub fn ErrorPanel() -> Element {
    rsx! {
        div { class: "status-panel error",
            p { "Could not load the catalog." }
            p { class: "text-secondary", "Check your connection and try again." }
            button {
                class: "retry-btn",
                onclick: move |_| {
                    let config = APP_CONFIG.read().clone();
                    crate::loader::reload(config);
                },
                "Try again"
            }
        }
    }
}
