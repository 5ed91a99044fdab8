use tauri::State;

use explorer::graph::{build_graph, RelationshipGraph};

use crate::state::{filters_or_default, AppState, FilterArgs};

#[tauri::command]
pub fn get_relationship_graph(
    state: State<AppState>,
    filters: Option<FilterArgs>,
) -> Result<RelationshipGraph, String> {
    let dataset = state.dataset()?;
    let config = state.config()?;
    let view = filters_or_default(filters).apply(dataset.rows());

    Ok(build_graph(
        dataset.rows(),
        &view,
        config.edge_cap,
        config.sample_seed,
    ))
}
