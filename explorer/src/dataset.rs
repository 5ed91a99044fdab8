//! Loaded dataset and its process-lifetime cache

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::backfill::resolve_years;
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::loader;
use crate::record::{CharacterRecord, EventMarker};

/// The character table with years backfilled, plus the timeline events.
///
/// Read-only once built. Character rows and edge rows are both views over
/// `rows`: see [`Dataset::characters`] and [`crate::graph::edges`].
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<CharacterRecord>,
    events: Vec<EventMarker>,
}

impl Dataset {
    /// Build from raw rows, resolving every row's birth/death years
    pub fn new(rows: Vec<CharacterRecord>, events: Vec<EventMarker>) -> Self {
        let rows = rows.into_iter().map(backfill_record).collect();
        Self { rows, events }
    }

    /// Load both tables named by `config`.
    ///
    /// A missing character table is an error. A missing event table only
    /// leaves the timeline without annotations.
    pub fn load(config: &ExplorerConfig) -> Result<Self> {
        let rows = loader::load_characters(&config.data_path)?;
        let events = match loader::load_events(&config.events_path) {
            Ok(events) => events,
            Err(ExplorerError::DataFileMissing(path)) => {
                warn!("Event table {} not found; timeline has no annotations", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let dataset = Self::new(rows, events);
        info!(
            "Loaded {} rows ({} characters, {} events) from {}",
            dataset.rows.len(),
            dataset.characters().len(),
            dataset.events.len(),
            config.data_path.display()
        );
        Ok(dataset)
    }

    /// Every physical row, in file order
    pub fn rows(&self) -> &[CharacterRecord] {
        &self.rows
    }

    pub fn events(&self) -> &[EventMarker] {
        &self.events
    }

    /// One row per character name, first occurrence wins
    pub fn characters(&self) -> Vec<&CharacterRecord> {
        unique_by_name(&self.rows)
    }

    /// First row for `name`
    pub fn find(&self, name: &str) -> Option<&CharacterRecord> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn backfill_record(record: CharacterRecord) -> CharacterRecord {
    let years = resolve_years(record.detail.as_deref(), record.born, record.died);
    CharacterRecord {
        born: years.born,
        died: years.died,
        ..record
    }
}

/// Keep the first row per character name, preserving order
pub fn unique_by_name<'a, I>(rows: I) -> Vec<&'a CharacterRecord>
where
    I: IntoIterator<Item = &'a CharacterRecord>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    rows.into_iter()
        .filter(|&r| seen.insert(r.name.as_str()))
        .collect()
}

// ============================================================================
// Cache
// ============================================================================

/// Loads the dataset on first use and hands out the same copy afterwards
#[derive(Debug)]
pub struct DatasetCache {
    config: ExplorerConfig,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The cached dataset, loading it if this is the first call.
    /// A failed load is not cached; the next call tries again.
    pub fn get_or_load(&self) -> Result<Arc<Dataset>> {
        self.cell
            .get_or_try_init(|| Dataset::load(&self.config).map(Arc::new))
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Drop the cached copy so the next access reads the files again
    pub fn clear(&mut self) {
        if self.cell.take().is_some() {
            info!("Dataset cache cleared");
        }
    }
}
