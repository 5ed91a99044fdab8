//! Dashboard configuration
//!
//! Defaults match the bundled sample data; every field can be overridden from
//! the environment (and from CLI flags in the `dune-explorer` binary).

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DATA_PATH_VAR: &str = "DUNE_EXPLORER_DATA";
pub const EVENTS_PATH_VAR: &str = "DUNE_EXPLORER_EVENTS";
pub const EDGE_CAP_VAR: &str = "DUNE_EXPLORER_EDGE_CAP";
pub const SEED_VAR: &str = "DUNE_EXPLORER_SEED";

/// Maximum number of relationship edges drawn at once
pub const DEFAULT_EDGE_CAP: usize = 50;
/// Seed for the edge sample, fixed so a filter selection always draws the same graph
pub const DEFAULT_SAMPLE_SEED: u64 = 42;
/// Bars on the culture chart
pub const DEFAULT_TOP_CULTURES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub data_path: PathBuf,
    pub events_path: PathBuf,
    pub edge_cap: usize,
    pub sample_seed: u64,
    pub top_cultures: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/duneCharacters.csv"),
            events_path: PathBuf::from("data/events.csv"),
            edge_cap: DEFAULT_EDGE_CAP,
            sample_seed: DEFAULT_SAMPLE_SEED,
            top_cultures: DEFAULT_TOP_CULTURES,
        }
    }
}

impl ExplorerConfig {
    /// Defaults overridden by any `DUNE_EXPLORER_*` variables that are set
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup; unparseable numbers keep the current value
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_PATH_VAR) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(EVENTS_PATH_VAR) {
            self.events_path = PathBuf::from(path);
        }
        if let Some(cap) = lookup(EDGE_CAP_VAR) {
            match cap.trim().parse() {
                Ok(cap) => self.edge_cap = cap,
                Err(_) => warn!("Ignoring {}={:?}: not a number", EDGE_CAP_VAR, cap),
            }
        }
        if let Some(seed) = lookup(SEED_VAR) {
            match seed.trim().parse() {
                Ok(seed) => self.sample_seed = seed,
                Err(_) => warn!("Ignoring {}={:?}: not a number", SEED_VAR, seed),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.edge_cap, 50);
        assert_eq!(config.sample_seed, 42);
        assert_eq!(config.top_cultures, 10);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (DATA_PATH_VAR, "/tmp/chars.csv"),
            (EDGE_CAP_VAR, "12"),
            (SEED_VAR, "not-a-seed"),
        ]
        .into_iter()
        .collect();

        let config = ExplorerConfig::default().with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.data_path, PathBuf::from("/tmp/chars.csv"));
        assert_eq!(config.edge_cap, 12);
        assert_eq!(config.sample_seed, DEFAULT_SAMPLE_SEED);
        assert_eq!(config.events_path, PathBuf::from("data/events.csv"));
    }
}
