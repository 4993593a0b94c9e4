use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use ecotrack_core::airquality::CityBoard;

#[derive(serde::Deserialize)]
pub struct PollutionQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub user_id: Option<String>,
}

/// GET /api/pollution — live air quality for a coordinate pair. When a
/// `user_id` is supplied the coordinates are also recorded as that user's
/// location.
pub async fn local_pollution(
    State(app): State<AppState>,
    Query(query): Query<PollutionQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err(AppError::bad_request(
            "Both lat and lon parameters are required",
        ));
    };

    let report = app.aqi.lookup(lat, lon).await;

    if let Some(user_id) = query.user_id {
        let tracker = app.tracker.clone();
        tokio::task::spawn_blocking(move || tracker.lock().set_location(&user_id, lat, lon))
            .await
            .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    }

    Ok(Json(serde_json::json!(report)))
}

/// GET /api/cities — the tracked city board with freshly rolled statuses.
pub async fn list_cities(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut board = CityBoard::load(&root)?;
        board.refresh_statuses(&mut rand::thread_rng());
        board.save(&root)?;
        Ok::<_, ecotrack_core::EcoError>(serde_json::json!({ "cities": board.cities }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
