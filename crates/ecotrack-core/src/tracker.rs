use crate::action::{Action, Catalog};
use crate::clock::{Clock, SystemClock};
use crate::error::{EcoError, Result};
use crate::user::{validate_user_id, Location, UserStats, UserStore};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// Outcome of a daily-task request.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyTask {
    /// The task assigned for the current date.
    Assigned(Action),
    /// The user has completed every catalog action.
    NonePending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CompletionReceipt {
    pub points_earned: u32,
    pub total_points: u64,
}

// ---------------------------------------------------------------------------
// EcoTracker
// ---------------------------------------------------------------------------

/// The eco-action state machine. Owns the path to the data directory plus the
/// clock and random source, so tests can pin both. Every operation is a full
/// read-modify-write cycle over the catalog and user documents; each mutation
/// persists the affected document once, atomically.
pub struct EcoTracker {
    root: PathBuf,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl EcoTracker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_parts(root, Box::new(SystemClock), StdRng::from_entropy())
    }

    pub fn with_parts(root: impl Into<PathBuf>, clock: Box<dyn Clock>, rng: StdRng) -> Self {
        Self {
            root: root.into(),
            clock,
            rng,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the user record if it does not exist. Idempotent; every other
    /// operation calls through here first. Returns true when a record was
    /// created.
    pub fn initialize_user(&mut self, user_id: &str) -> Result<bool> {
        validate_user_id(user_id)?;
        let catalog = Catalog::load(&self.root)?;
        let mut store = UserStore::load(&self.root)?;
        let created = store.ensure(user_id, &catalog, self.clock.today());
        if created {
            store.save(&self.root)?;
        }
        Ok(created)
    }

    /// Return the user's task for the current date, drawing a fresh one when
    /// the date has advanced past `last_updated` or no task is assigned.
    /// Asking again on the same day returns the same task.
    pub fn daily_task(&mut self, user_id: &str) -> Result<DailyTask> {
        validate_user_id(user_id)?;
        let catalog = Catalog::load(&self.root)?;
        let mut store = UserStore::load(&self.root)?;
        if store.ensure(user_id, &catalog, self.clock.today()) {
            store.save(&self.root)?;
        }

        let today = self.clock.today();
        let user = store.get_mut(user_id)?;

        let current = match user.daily_task {
            Some(id) if today <= user.last_updated => id,
            _ => {
                // New day, or no task assigned: draw uniformly from the
                // pending actions still present in the catalog.
                let candidates: Vec<u32> = user
                    .pending_actions
                    .iter()
                    .copied()
                    .filter(|&id| catalog.get(id).is_some())
                    .collect();
                match candidates.choose(&mut self.rng).copied() {
                    Some(id) => {
                        user.daily_task = Some(id);
                        user.last_updated = today;
                        store.save(&self.root)?;
                        id
                    }
                    None => {
                        // last_updated stays put so the draw re-fires on the
                        // next call once new actions exist.
                        return Ok(DailyTask::NonePending);
                    }
                }
            }
        };

        let action = catalog
            .get(current)
            .cloned()
            .ok_or(EcoError::ActionNotFound(current))?;
        Ok(DailyTask::Assigned(action))
    }

    /// Mark a pending action as completed: moves it to the completed list,
    /// credits its points, and clears a matching daily task.
    ///
    /// An id missing from the catalog is `ActionNotFound`; an id the user has
    /// already completed is `ActionNotPending`. Neither mutates state.
    pub fn complete_action(&mut self, user_id: &str, action_id: u32) -> Result<CompletionReceipt> {
        validate_user_id(user_id)?;
        let catalog = Catalog::load(&self.root)?;
        let mut store = UserStore::load(&self.root)?;
        if store.ensure(user_id, &catalog, self.clock.today()) {
            store.save(&self.root)?;
        }

        let action = catalog
            .get(action_id)
            .ok_or(EcoError::ActionNotFound(action_id))?;

        let user = store.get_mut(user_id)?;
        let Some(pos) = user.pending_actions.iter().position(|&id| id == action_id) else {
            return Err(EcoError::ActionNotPending(action_id));
        };

        user.pending_actions.remove(pos);
        user.completed_actions.push(action_id);
        user.points += u64::from(action.points);
        if user.daily_task == Some(action_id) {
            user.daily_task = None;
        }
        let total_points = user.points;
        store.save(&self.root)?;

        Ok(CompletionReceipt {
            points_earned: action.points,
            total_points,
        })
    }

    /// Aggregate view of a user: points, resolved completed actions in
    /// completion order, resolved pending actions in catalog order, the
    /// resolved daily task, and location.
    pub fn user_stats(&mut self, user_id: &str) -> Result<UserStats> {
        validate_user_id(user_id)?;
        let catalog = Catalog::load(&self.root)?;
        let mut store = UserStore::load(&self.root)?;
        if store.ensure(user_id, &catalog, self.clock.today()) {
            store.save(&self.root)?;
        }
        let user = store.get(user_id)?;

        let completed_actions: Vec<Action> = user
            .completed_actions
            .iter()
            .filter_map(|&id| catalog.get(id).cloned())
            .collect();
        let pending_actions: Vec<Action> = catalog
            .actions
            .iter()
            .filter(|a| user.pending_actions.contains(&a.id))
            .cloned()
            .collect();
        let daily_task = user.daily_task.and_then(|id| catalog.get(id).cloned());

        Ok(UserStats {
            points: user.points,
            completed_actions,
            pending_actions,
            daily_task,
            location: user.location,
        })
    }

    /// Overwrite the user's stored location. Coordinates are trusted as-is.
    pub fn set_location(&mut self, user_id: &str, latitude: f64, longitude: f64) -> Result<()> {
        validate_user_id(user_id)?;
        let catalog = Catalog::load(&self.root)?;
        let mut store = UserStore::load(&self.root)?;
        store.ensure(user_id, &catalog, self.clock.today());

        let user = store.get_mut(user_id)?;
        user.location = Some(Location {
            latitude,
            longitude,
        });
        store.save(&self.root)
    }

    /// Register a new catalog action and backfill it into every existing
    /// user's pending set. New actions are never auto-completed.
    pub fn add_action(&mut self, description: &str, points: u32, details: &str) -> Result<Action> {
        let mut catalog = Catalog::load(&self.root)?;
        let action = catalog.add(description, points, details)?;
        catalog.save(&self.root)?;

        let mut store = UserStore::load(&self.root)?;
        for user in store.users.values_mut() {
            if !user.pending_actions.contains(&action.id) {
                user.pending_actions.push(action.id);
            }
        }
        store.save(&self.root)?;

        Ok(action)
    }

    /// The full catalog, seeding defaults on first use.
    pub fn actions(&self) -> Result<Vec<Action>> {
        Ok(Catalog::load(&self.root)?.actions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
