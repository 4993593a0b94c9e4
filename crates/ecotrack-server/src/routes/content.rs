use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use ecotrack_core::content::{Notifications, Tips};

/// GET /api/notifications/random — one random environmental notification.
pub async fn random_notification(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let notifications = Notifications::load(&root)?;
        let pick = notifications.random(&mut rand::thread_rng()).to_string();
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({ "notification": pick }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct AddNotificationBody {
    pub message: String,
}

/// POST /api/notifications/add — append a new notification.
pub async fn add_notification(
    State(app): State<AppState>,
    Json(body): Json<AddNotificationBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut notifications = Notifications::load(&root)?;
        notifications.add(body.message)?;
        notifications.save(&root)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": "Notification added successfully",
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/tips/random — one random environmental tip.
pub async fn random_tip(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let tips = Tips::load(&root)?;
        let pick = tips.random(&mut rand::thread_rng()).to_string();
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({ "tip": pick }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct AddTipBody {
    pub tip: String,
}

/// POST /api/tips/add — append a new tip.
pub async fn add_tip(
    State(app): State<AppState>,
    Json(body): Json<AddTipBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut tips = Tips::load(&root)?;
        tips.add(body.tip)?;
        tips.save(&root)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({
            "success": true,
            "message": "Tip added successfully",
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
