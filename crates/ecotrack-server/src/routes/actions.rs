use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/actions — the full action catalog.
pub async fn list_actions(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let actions = tracker.lock().actions()?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({ "actions": actions }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct AddActionBody {
    pub description: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub details: String,
}

fn default_points() -> u32 {
    5
}

/// POST /api/actions/add — register a new catalog action and backfill it
/// into every existing user's pending set.
pub async fn add_action(
    State(app): State<AppState>,
    Json(body): Json<AddActionBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let action = tracker
            .lock()
            .add_action(&body.description, body.points, &body.details)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": "Action added successfully",
            "action_id": action.id,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
