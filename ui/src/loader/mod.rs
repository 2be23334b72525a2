//! Catalog loading: one load per page lifetime, concurrent per-category
//! fetches in remote mode, and a manual full reload on failure.

pub mod fetch;
pub mod sources;

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;
use futures::future::join_all;
use thiserror::Error;

use catalog_common::record::{self, ParseError, RawRecord};
use catalog_common::types::CatalogItem;

use crate::config::{AppConfig, DataSource};
use crate::state::{LoadPhase, CATALOG, LOAD_PHASE};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Why a catalog load failed as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no catalog source could be fetched")]
    AllSourcesFailed,
}

/// Kick off the initial load. Subsequent calls are no-ops; the retry
/// affordance goes through [`reload`].
pub fn init(config: AppConfig) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    spawn_load(config);
}

/// Full reload after a failed load.
pub fn reload(config: AppConfig) {
    spawn_load(config);
}

fn spawn_load(config: AppConfig) {
    *LOAD_PHASE.write() = LoadPhase::Loading;
    wasm_bindgen_futures::spawn_local(async move {
        match load(&config).await {
            Ok(items) => {
                tracing::info!("Loaded {} catalog entries", items.len());
                *CATALOG.write() = items;
                *LOAD_PHASE.write() = LoadPhase::Ready;
            }
            Err(error) => {
                tracing::warn!("Catalog load failed: {error}");
                *CATALOG.write() = Vec::new();
                *LOAD_PHASE.write() = LoadPhase::Failed;
            }
        }
    });
}

async fn load(config: &AppConfig) -> Result<Vec<CatalogItem>, LoadError> {
    let raw = match config.source {
        DataSource::Bundled => record::parse_document(sources::BUNDLED_CATALOG)?,
        DataSource::Remote => fetch_remote().await?,
    };
    Ok(record::normalize(raw))
}

/// Fetch every per-category document concurrently and join on all of them.
///
/// A failed document contributes an empty slice; slices are concatenated in
/// source order. The load only fails when no document succeeds.
async fn fetch_remote() -> Result<Vec<RawRecord>, LoadError> {
    let fetches = sources::CATEGORY_FILES.iter().map(|file| fetch_one(file));
    let outcomes = join_all(fetches).await;

    let mut records = Vec::new();
    let mut succeeded = 0usize;
    for outcome in outcomes.into_iter().flatten() {
        succeeded += 1;
        records.extend(outcome);
    }
    if succeeded == 0 {
        return Err(LoadError::AllSourcesFailed);
    }
    Ok(records)
}

async fn fetch_one(file: &str) -> Option<Vec<RawRecord>> {
    let url = sources::remote_url(file);
    let text = match fetch::fetch_text(&url).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!("Failed to fetch {file}: {error}");
            return None;
        }
    };
    match record::parse_document(&text) {
        Ok(records) => Some(records),
        Err(error) => {
            tracing::warn!("Failed to parse {file}: {error}");
            None
        }
    }
}
