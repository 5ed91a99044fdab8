use std::sync::{Arc, Mutex};

use explorer::{Dataset, DatasetCache, ExplorerConfig, FilterSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global application state managed by Tauri
pub struct AppState {
    pub cache: Mutex<DatasetCache>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            cache: Mutex::new(DatasetCache::new(config)),
        }
    }

    /// The cached dataset, loaded on first use.
    ///
    /// Errors are returned as display strings; the frontend shows them as a
    /// warning and stops rendering.
    pub fn dataset(&self) -> Result<Arc<Dataset>, String> {
        let cache = self.cache.lock().map_err(|_| POISONED.to_string())?;
        cache.get_or_load().map_err(|e| {
            warn!("Dataset unavailable: {}", e);
            e.to_string()
        })
    }

    pub fn config(&self) -> Result<ExplorerConfig, String> {
        let cache = self.cache.lock().map_err(|_| POISONED.to_string())?;
        Ok(cache.config().clone())
    }

    /// Drop the cached table and load it again
    pub fn reload(&self) -> Result<Arc<Dataset>, String> {
        let mut cache = self.cache.lock().map_err(|_| POISONED.to_string())?;
        cache.clear();
        cache.get_or_load().map_err(|e| e.to_string())
    }
}

const POISONED: &str = "dataset cache is unavailable after a previous failure";

// -- Serializable types exchanged with the frontend --

/// Selector values as the widgets send them; `None` or `"All"` means no filter
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct FilterArgs {
    pub book: Option<String>,
    pub house: Option<String>,
    pub relationship: Option<String>,
}

impl FilterArgs {
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet::from_labels(
            self.book.as_deref(),
            self.house.as_deref(),
            self.relationship.as_deref(),
        )
    }
}

/// Filter arguments are optional on every command
pub fn filters_or_default(filters: Option<FilterArgs>) -> FilterSet {
    filters.unwrap_or_default().to_filter_set()
}

#[derive(Serialize, Clone)]
pub struct ReloadResult {
    pub rows: u32,
    pub characters: u32,
    pub events: u32,
}
