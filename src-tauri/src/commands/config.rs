use tauri::State;

use explorer::ExplorerConfig;

use crate::state::AppState;

#[tauri::command]
pub fn get_config(state: State<AppState>) -> Result<ExplorerConfig, String> {
    state.config()
}
