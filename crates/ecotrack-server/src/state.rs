use crate::aqi::AqiClient;
use ecotrack_core::tracker::EcoTracker;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The tracker sits behind a single mutex so concurrent requests for the same
/// user cannot interleave their read-modify-write cycles and lose updates.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub tracker: Arc<Mutex<EcoTracker>>,
    pub aqi: Arc<AqiClient>,
}

impl AppState {
    pub fn new(root: PathBuf, api_key: Option<String>) -> Self {
        let tracker = Arc::new(Mutex::new(EcoTracker::new(root.clone())));
        Self {
            root,
            tracker,
            aqi: Arc::new(AqiClient::new(api_key)),
        }
    }
}
