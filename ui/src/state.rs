use catalog_common::facets::ALL;
use catalog_common::types::CatalogItem;
use dioxus::prelude::*;

use crate::config::AppConfig;

// --- Data types ---

/// Load lifecycle for the catalog data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Which page variant is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Classic,
    Gemini,
}

/// Card rendering mode on the classic page: action buttons, or the longer
/// description text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Preview,
    Details,
}

// --- Global signals ---

/// Normalized catalog, loaded once per page lifetime and never mutated.
pub static CATALOG: GlobalSignal<Vec<CatalogItem>> = Global::new(Vec::new);

/// Load lifecycle phase.
pub static LOAD_PHASE: GlobalSignal<LoadPhase> = Global::new(LoadPhase::default);

/// Current search query text.
pub static SEARCH_QUERY: GlobalSignal<String> = Global::new(String::new);

/// Selected brand facet value (`All` = unconstrained).
pub static BRAND_FILTER: GlobalSignal<String> = Global::new(|| ALL.to_string());

/// Selected category facet value (`All` = unconstrained).
pub static CATEGORY_FILTER: GlobalSignal<String> = Global::new(|| ALL.to_string());

/// Preview/Details toggle on the classic page.
pub static VIEW_MODE: GlobalSignal<ViewMode> = Global::new(ViewMode::default);

/// 1-based page of the classic grid.
pub static CURRENT_PAGE: GlobalSignal<usize> = Global::new(|| 1);

/// Active page variant.
pub static ACTIVE_THEME: GlobalSignal<Theme> = Global::new(Theme::default);

/// Startup configuration, resolved once in `App` and read-only afterwards.
pub static APP_CONFIG: GlobalSignal<AppConfig> = Global::new(AppConfig::default);
