use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use ecotrack_core::tracker::DailyTask;

#[derive(serde::Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct InitUserBody {
    pub user_id: String,
}

/// POST /api/user/init — create the user record if it does not exist.
pub async fn init_user(
    State(app): State<AppState>,
    Json(body): Json<InitUserBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let created = tracker.lock().initialize_user(&body.user_id)?;
        let message = if created {
            "User initialized successfully"
        } else {
            "User already exists"
        };
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": message,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/user/task — the user's daily task, drawing a fresh one when the
/// date has rolled over.
pub async fn daily_task(
    State(app): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::bad_request("user_id parameter is required"));
    };

    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let task = tracker.lock().daily_task(&user_id)?;
        Ok::<_, ecotrack_core::EcoError>(match task {
            DailyTask::Assigned(action) => serde_json::json!({ "task": action }),
            DailyTask::NonePending => serde_json::json!({
                "task": null,
                "message": "No pending tasks available",
            }),
        })
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CompleteActionBody {
    pub user_id: String,
    pub action_id: u32,
}

/// POST /api/user/complete — mark a pending action as completed.
pub async fn complete_action(
    State(app): State<AppState>,
    Json(body): Json<CompleteActionBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let receipt = tracker
            .lock()
            .complete_action(&body.user_id, body.action_id)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": "Action completed successfully",
            "points_earned": receipt.points_earned,
            "total_points": receipt.total_points,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/user/stats — points, resolved action lists, daily task, location.
pub async fn user_stats(
    State(app): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::bad_request("user_id parameter is required"));
    };

    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        let stats = tracker.lock().user_stats(&user_id)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!(stats))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct SetLocationBody {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// POST /api/user/location — overwrite the user's stored location.
pub async fn set_location(
    State(app): State<AppState>,
    Json(body): Json<SetLocationBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tracker = app.tracker.clone();
    let result = tokio::task::spawn_blocking(move || {
        tracker
            .lock()
            .set_location(&body.user_id, body.latitude, body.longitude)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": "Location updated successfully",
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
