use tauri::State;

use crate::state::AppState;

/// Single entry point for UI-to-native requests, dispatched by method name.
#[tauri::command]
pub async fn native_request(
    method: String,
    state: State<'_, AppState>,
) -> Result<serde_json::Value, String> {
    state
        .bridge()
        .dispatch(&method)
        .await
        .map_err(|e| e.to_string())
}
