use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Data file constants
// ---------------------------------------------------------------------------

pub const DATA_DIR: &str = "data";

pub const ACTIONS_FILE: &str = "data/eco_actions.json";
pub const USERS_FILE: &str = "data/user_info.json";
pub const NOTIFICATIONS_FILE: &str = "data/notifications.json";
pub const TIPS_FILE: &str = "data/environmental_tips.json";
pub const CITIES_FILE: &str = "data/cities_pollution.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

pub fn actions_path(root: &Path) -> PathBuf {
    root.join(ACTIONS_FILE)
}

pub fn users_path(root: &Path) -> PathBuf {
    root.join(USERS_FILE)
}

pub fn notifications_path(root: &Path) -> PathBuf {
    root.join(NOTIFICATIONS_FILE)
}

pub fn tips_path(root: &Path) -> PathBuf {
    root.join(TIPS_FILE)
}

pub fn cities_path(root: &Path) -> PathBuf {
    root.join(CITIES_FILE)
}
