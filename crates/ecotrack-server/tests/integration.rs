use axum::http::StatusCode;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn router(dir: &TempDir) -> axum::Router {
    ecotrack_server::build_router(dir.path().to_path_buf(), None)
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a JSON body via `oneshot` and return (status, parsed JSON body).
async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_index_lists_endpoints() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["endpoints"]["cities"], "/api/cities");
    assert!(json["message"].as_str().unwrap().contains("EcoTracker"));
}

#[tokio::test]
async fn random_notification_returns_seeded_content() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/notifications/random").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["notification"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn add_notification_then_blank_is_rejected() {
    let dir = TempDir::new().unwrap();

    let (status, json) = post_json(
        router(&dir),
        "/api/notifications/add",
        serde_json::json!({ "message": "Composting week starts Monday." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, _json) = post_json(
        router(&dir),
        "/api/notifications/add",
        serde_json::json!({ "message": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn random_tip_returns_seeded_content() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/tips/random").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["tip"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn user_init_task_complete_stats_flow() {
    let dir = TempDir::new().unwrap();

    let (status, json) = post_json(
        router(&dir),
        "/api/user/init",
        serde_json::json!({ "user_id": "alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User initialized successfully");

    // Init again: idempotent.
    let (status, json) = post_json(
        router(&dir),
        "/api/user/init",
        serde_json::json!({ "user_id": "alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "User already exists");

    // Daily task comes from the seeded catalog.
    let (status, json) = get(router(&dir), "/api/user/task?user_id=alice").await;
    assert_eq!(status, StatusCode::OK);
    let task_id = json["task"]["id"].as_u64().unwrap();
    assert!((1..=20).contains(&task_id));

    // Asking again on the same day returns the same task.
    let (_status, json) = get(router(&dir), "/api/user/task?user_id=alice").await;
    assert_eq!(json["task"]["id"].as_u64().unwrap(), task_id);

    // Complete the daily task.
    let (status, json) = post_json(
        router(&dir),
        "/api/user/complete",
        serde_json::json!({ "user_id": "alice", "action_id": task_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let earned = json["points_earned"].as_u64().unwrap();
    assert!(earned > 0);
    assert_eq!(json["total_points"].as_u64().unwrap(), earned);

    // Stats reflect the completion.
    let (status, json) = get(router(&dir), "/api/user/stats?user_id=alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"].as_u64().unwrap(), earned);
    assert_eq!(json["completed_actions"].as_array().unwrap().len(), 1);
    assert_eq!(json["pending_actions"].as_array().unwrap().len(), 19);
    assert!(json["daily_task"].is_null());
}

#[tokio::test]
async fn re_completion_conflicts_and_unknown_action_is_404() {
    let dir = TempDir::new().unwrap();

    let (status, _json) = post_json(
        router(&dir),
        "/api/user/complete",
        serde_json::json!({ "user_id": "bob", "action_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_json(
        router(&dir),
        "/api/user/complete",
        serde_json::json!({ "user_id": "bob", "action_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("not pending"));

    let (status, _json) = post_json(
        router(&dir),
        "/api/user/complete",
        serde_json::json!({ "user_id": "bob", "action_id": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn task_without_user_id_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/user/task").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn set_location_shows_up_in_stats() {
    let dir = TempDir::new().unwrap();

    let (status, json) = post_json(
        router(&dir),
        "/api/user/location",
        serde_json::json!({ "user_id": "alice", "latitude": 40.7128, "longitude": -74.006 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_status, json) = get(router(&dir), "/api/user/stats?user_id=alice").await;
    assert_eq!(json["location"]["latitude"].as_f64().unwrap(), 40.7128);
}

#[tokio::test]
async fn actions_list_and_add_with_backfill() {
    let dir = TempDir::new().unwrap();

    let (status, json) = get(router(&dir), "/api/actions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["actions"].as_array().unwrap().len(), 20);

    // An existing user picks up the new action as pending.
    let (_status, _json) = post_json(
        router(&dir),
        "/api/user/init",
        serde_json::json!({ "user_id": "carol" }),
    )
    .await;

    let (status, json) = post_json(
        router(&dir),
        "/api/actions/add",
        serde_json::json!({ "description": "Repair instead of replace", "points": 12 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["action_id"].as_u64().unwrap(), 21);

    let (_status, json) = get(router(&dir), "/api/user/stats?user_id=carol").await;
    assert_eq!(json["pending_actions"].as_array().unwrap().len(), 21);
    assert_eq!(json["points"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn add_action_requires_description() {
    let dir = TempDir::new().unwrap();
    let (status, _json) = post_json(
        router(&dir),
        "/api/actions/add",
        serde_json::json!({ "description": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pollution_without_coordinates_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/pollution").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("lat"));
}

#[tokio::test]
async fn pollution_without_api_key_returns_synthetic_report() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/pollution?lat=37.77&lon=-122.41").await;

    assert_eq!(status, StatusCode::OK);
    let color = json["status"].as_str().unwrap();
    assert!(["green", "yellow", "red"].contains(&color));
    assert!((1..=5).contains(&json["aqi_value"].as_u64().unwrap()));
    assert_eq!(json["aqi_status"], "unknown");
}

#[tokio::test]
async fn pollution_with_user_id_records_location() {
    let dir = TempDir::new().unwrap();

    let (status, _json) = get(
        router(&dir),
        "/api/pollution?lat=37.77&lon=-122.41&user_id=dave",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_status, json) = get(router(&dir), "/api/user/stats?user_id=dave").await;
    assert_eq!(json["location"]["latitude"].as_f64().unwrap(), 37.77);
    assert_eq!(json["location"]["longitude"].as_f64().unwrap(), -122.41);
}

#[tokio::test]
async fn cities_board_returns_rolled_statuses() {
    let dir = TempDir::new().unwrap();
    let (status, json) = get(router(&dir), "/api/cities").await;

    assert_eq!(status, StatusCode::OK);
    let cities = json["cities"].as_array().unwrap();
    assert_eq!(cities.len(), 10);
    for city in cities {
        let color = city["status"].as_str().unwrap();
        assert!(["green", "yellow", "red"].contains(&color));
    }
}
