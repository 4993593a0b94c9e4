use axum::Json;

/// GET / — API index.
pub async fn api_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the EcoTracker API",
        "endpoints": {
            "notifications": "/api/notifications/random",
            "tips": "/api/tips/random",
            "pollution": "/api/pollution?lat=37.77&lon=-122.41",
            "user_task": "/api/user/task?user_id=<user_id>",
            "complete_task": "/api/user/complete (POST)",
            "user_stats": "/api/user/stats?user_id=<user_id>",
            "cities": "/api/cities",
        },
        "app_info": "EcoTracker helps users reduce their environmental impact by \
                     tracking eco-friendly actions and providing local air quality information.",
    }))
}
