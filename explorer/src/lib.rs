//! Dune Character Explorer
//!
//! Loads the character table, backfills birth/death years from free-text
//! annotations and shapes the filtered views the dashboard draws.

pub mod backfill;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod filter;
pub mod graph;
pub mod loader;
pub mod palette;
pub mod record;

pub use backfill::{resolve_years, YearSpan};
pub use config::ExplorerConfig;
pub use dashboard::{render_dashboard, DashboardView};
pub use dataset::{Dataset, DatasetCache};
pub use error::{ExplorerError, Result};
pub use filter::{FilterSet, Selection};
pub use record::*;
