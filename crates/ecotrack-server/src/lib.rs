pub mod aqi;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf, api_key: Option<String>) -> Router {
    let app_state = state::AppState::new(root, api_key);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index::api_index))
        // Notifications
        .route(
            "/api/notifications/random",
            get(routes::content::random_notification),
        )
        .route(
            "/api/notifications/add",
            post(routes::content::add_notification),
        )
        // Tips
        .route("/api/tips/random", get(routes::content::random_tip))
        .route("/api/tips/add", post(routes::content::add_tip))
        // Air quality
        .route("/api/pollution", get(routes::pollution::local_pollution))
        .route("/api/cities", get(routes::pollution::list_cities))
        // Eco tracker
        .route("/api/user/init", post(routes::users::init_user))
        .route("/api/user/task", get(routes::users::daily_task))
        .route("/api/user/complete", post(routes::users::complete_action))
        .route("/api/user/stats", get(routes::users::user_stats))
        .route("/api/user/location", post(routes::users::set_location))
        // Action catalog
        .route("/api/actions", get(routes::actions::list_actions))
        .route("/api/actions/add", post(routes::actions::add_action))
        .layer(cors)
        .with_state(app_state)
}

/// Start the ecotrack API server.
pub async fn serve(root: PathBuf, port: u16, api_key: Option<String>) -> anyhow::Result<()> {
    if api_key.is_none() {
        tracing::warn!("no OpenWeatherMap API key set; pollution lookups use synthetic data");
    }
    let app = build_router(root, api_key);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();

    tracing::info!("ecotrack API listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
