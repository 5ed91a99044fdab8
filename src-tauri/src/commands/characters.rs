use tauri::State;

use explorer::detail::{character_detail, character_names, CharacterDetail};

use crate::state::{filters_or_default, AppState, FilterArgs};

#[tauri::command]
pub fn get_character_names(
    state: State<AppState>,
    filters: Option<FilterArgs>,
) -> Result<Vec<String>, String> {
    let dataset = state.dataset()?;
    let view = filters_or_default(filters).apply(dataset.rows());
    Ok(character_names(&view))
}

#[tauri::command]
pub fn get_character_detail(
    state: State<AppState>,
    name: String,
    filters: Option<FilterArgs>,
) -> Result<Option<CharacterDetail>, String> {
    let dataset = state.dataset()?;
    let view = filters_or_default(filters).apply(dataset.rows());
    Ok(character_detail(&view, &name))
}
