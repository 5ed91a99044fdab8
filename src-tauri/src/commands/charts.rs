use tauri::State;

use explorer::charts::{self, CategoryCount, Timeline};

use crate::state::{filters_or_default, AppState, FilterArgs};

#[tauri::command]
pub fn get_house_counts(
    state: State<AppState>,
    filters: Option<FilterArgs>,
) -> Result<Vec<CategoryCount>, String> {
    let dataset = state.dataset()?;
    let view = filters_or_default(filters).apply(dataset.rows());
    Ok(charts::house_counts(&view))
}

#[tauri::command]
pub fn get_culture_counts(
    state: State<AppState>,
    filters: Option<FilterArgs>,
    top: Option<u32>,
) -> Result<Vec<CategoryCount>, String> {
    let dataset = state.dataset()?;
    let top = match top {
        Some(n) => n as usize,
        None => state.config()?.top_cultures,
    };
    let view = filters_or_default(filters).apply(dataset.rows());
    Ok(charts::culture_counts(&view, top))
}

#[tauri::command]
pub fn get_timeline(state: State<AppState>, filters: Option<FilterArgs>) -> Result<Timeline, String> {
    let dataset = state.dataset()?;
    let view = filters_or_default(filters).apply(dataset.rows());
    Ok(charts::timeline(&view, dataset.events()))
}
