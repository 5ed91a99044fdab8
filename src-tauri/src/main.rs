// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod commands;
mod state;

use std::path::Path;

use explorer::ExplorerConfig;
use state::AppState;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Sample tables shipped at the workspace root
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

/// Environment config; relative paths that do not exist from the working
/// directory fall back to the bundled data directory.
fn resolve_config() -> ExplorerConfig {
    let mut config = ExplorerConfig::from_env();
    let bundled = Path::new(BUNDLED_DATA_DIR);
    for path in [&mut config.data_path, &mut config.events_path] {
        if path.is_relative() && !path.exists() {
            if let Some(fallback) = path.file_name().map(|name| bundled.join(name)) {
                *path = fallback;
            }
        }
    }
    config
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("[WARN] tracing subscriber already installed");
    }

    let config = resolve_config();
    info!("Character table: {}", config.data_path.display());

    tauri::Builder::default()
        .manage(AppState::new(config))
        .invoke_handler(tauri::generate_handler![
            // Config
            commands::config::get_config,
            // Dataset
            commands::dataset::get_summary,
            commands::dataset::get_filter_options,
            commands::dataset::reload_dataset,
            // Charts
            commands::charts::get_house_counts,
            commands::charts::get_culture_counts,
            commands::charts::get_timeline,
            // Relationships
            commands::graph::get_relationship_graph,
            // Characters
            commands::characters::get_character_names,
            commands::characters::get_character_detail,
            // Whole dashboard
            commands::dashboard::get_dashboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
