use crate::action::{Action, Catalog};
use crate::error::{EcoError, Result};
use crate::paths;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const MAX_USER_ID_LEN: usize = 128;

/// User ids are opaque, externally supplied keys. We only reject the
/// degenerate cases that would produce unusable store entries.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() || user_id.len() > MAX_USER_ID_LEN {
        return Err(EcoError::InvalidUserId(user_id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// UserRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-user tracker state.
///
/// Invariants maintained by the tracker:
/// - `completed_actions` and `pending_actions` are disjoint.
/// - `daily_task`, when present, is a member of `pending_actions`.
/// - `points` is the sum of point values of every completed action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub points: u64,
    pub completed_actions: Vec<u32>,
    pub pending_actions: Vec<u32>,
    pub daily_task: Option<u32>,
    pub last_updated: NaiveDate,
    pub location: Option<Location>,
}

impl UserRecord {
    /// Fresh record: zero points, everything currently in the catalog pending.
    pub fn new(catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            points: 0,
            completed_actions: Vec::new(),
            pending_actions: catalog.ids(),
            daily_task: None,
            last_updated: today,
            location: None,
        }
    }
}

/// Fully-resolved view of a user, as returned by the stats operation.
/// Completed actions keep completion order; pending actions keep catalog
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub points: u64,
    pub completed_actions: Vec<Action>,
    pub pending_actions: Vec<Action>,
    pub daily_task: Option<Action>,
    pub location: Option<Location>,
}

// ---------------------------------------------------------------------------
// UserStore
// ---------------------------------------------------------------------------

/// All user records, persisted as a single JSON document keyed by user id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStore {
    pub users: BTreeMap<String, UserRecord>,
}

impl UserStore {
    /// Load the store from disk. A missing file is an empty store; a corrupt
    /// file is a hard error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::users_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let store: UserStore = serde_json::from_str(&data)?;
        Ok(store)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::users_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn get(&self, user_id: &str) -> Result<&UserRecord> {
        self.users
            .get(user_id)
            .ok_or_else(|| EcoError::UserNotFound(user_id.to_string()))
    }

    pub fn get_mut(&mut self, user_id: &str) -> Result<&mut UserRecord> {
        self.users
            .get_mut(user_id)
            .ok_or_else(|| EcoError::UserNotFound(user_id.to_string()))
    }

    /// Create the record if it does not exist. Returns true when a record was
    /// created; the caller decides when to persist.
    pub fn ensure(&mut self, user_id: &str, catalog: &Catalog, today: NaiveDate) -> bool {
        if self.users.contains_key(user_id) {
            return false;
        }
        self.users
            .insert(user_id.to_string(), UserRecord::new(catalog, today));
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
