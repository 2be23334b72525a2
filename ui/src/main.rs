#![allow(non_snake_case)]

use dioxus::prelude::*;

mod config;
mod loader;
mod state;
mod views;

use state::{LoadPhase, Theme, ACTIVE_THEME, APP_CONFIG, LOAD_PHASE};
use views::catalog_grid::CatalogsPage;
use views::gemini::GeminiPage;
use views::status::{ErrorPanel, LoadingPanel};

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        let config = config::AppConfig::detect();
        *APP_CONFIG.write() = config.clone();
        loader::init(config);
    });

    let theme = ACTIVE_THEME.read().clone();
    let phase = LOAD_PHASE.read().clone();
    let show_banner = APP_CONFIG.read().show_preview_banner;

    let classic_class = if theme == Theme::Classic {
        "theme-btn active"
    } else {
        "theme-btn"
    };
    let gemini_class = if theme == Theme::Gemini {
        "theme-btn active"
    } else {
        "theme-btn"
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { class: "app-shell",
            if show_banner && theme == Theme::Gemini {
                div { class: "preview-banner",
                    "Gemini UI preview enabled - this is a test version of the new design"
                }
            }

            header { class: "app-header",
                h1 { class: "app-title", "HINCH" }

                div { class: "header-controls",
                    button {
                        class: "{classic_class}",
                        onclick: move |_| {
                            *ACTIVE_THEME.write() = Theme::Classic;
                        },
                        "Catalogs"
                    }
                    button {
                        class: "{gemini_class}",
                        onclick: move |_| {
                            *ACTIVE_THEME.write() = Theme::Gemini;
                        },
                        "Gemini"
                    }
                }
            }

            if phase == LoadPhase::Failed {
                ErrorPanel {}
            } else if phase != LoadPhase::Ready {
                LoadingPanel {}
            } else if theme == Theme::Gemini {
                GeminiPage {}
            } else {
                CatalogsPage {}
            }
        }
    }
}
