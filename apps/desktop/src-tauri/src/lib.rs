use tauri::Manager;

mod commands;
mod state;
#[cfg(test)]
mod e2e;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env file from the crate root directory
    let _ = dotenvy::from_path(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let authority = cardfile::default_authority();
            app.manage(state::AppState::new(authority));
            tracing::info!("native bridge registered");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![commands::native_request])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
