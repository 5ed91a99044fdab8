use tauri::State;
use tracing::info;

use explorer::charts::{self, SummaryStats};
use explorer::filter::FilterOptions;

use crate::state::{AppState, ReloadResult};

#[tauri::command]
pub fn get_summary(state: State<AppState>) -> Result<SummaryStats, String> {
    let dataset = state.dataset()?;
    Ok(charts::summary(dataset.rows()))
}

#[tauri::command]
pub fn get_filter_options(state: State<AppState>) -> Result<FilterOptions, String> {
    let dataset = state.dataset()?;
    Ok(FilterOptions::from_rows(dataset.rows()))
}

#[tauri::command]
pub fn reload_dataset(state: State<AppState>) -> Result<ReloadResult, String> {
    let dataset = state.reload()?;
    info!("Dataset reloaded: {} rows", dataset.rows().len());

    Ok(ReloadResult {
        rows: dataset.rows().len() as u32,
        characters: dataset.characters().len() as u32,
        events: dataset.events().len() as u32,
    })
}
