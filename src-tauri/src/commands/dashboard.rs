use tauri::State;

use explorer::{render_dashboard, DashboardView};

use crate::state::{filters_or_default, AppState, FilterArgs};

/// Everything the window shows, recomputed for the current widget values
#[tauri::command]
pub fn get_dashboard(
    state: State<AppState>,
    filters: Option<FilterArgs>,
    character: Option<String>,
) -> Result<DashboardView, String> {
    let dataset = state.dataset()?;
    let config = state.config()?;
    let filters = filters_or_default(filters);

    Ok(render_dashboard(
        &dataset,
        &filters,
        character.as_deref(),
        &config,
    ))
}
