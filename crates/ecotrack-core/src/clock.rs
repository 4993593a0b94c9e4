use chrono::{Datelike, NaiveDate};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Source of the current calendar date. The tracker's daily rotation compares
/// whole dates, never times, so this is the only time dependency to inject.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the host's local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Settable clock for tests. Clones share the same underlying date, so a test
/// can keep a handle while the tracker owns a boxed clone.
#[derive(Debug, Clone)]
pub struct ManualClock {
    days: Arc<AtomicI32>,
}

impl ManualClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            days: Arc::new(AtomicI32::new(date.num_days_from_ce())),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.days.store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    pub fn advance_days(&self, n: i32) {
        self.days.fetch_add(n, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.days.load(Ordering::SeqCst))
            .unwrap_or(NaiveDate::MIN)
    }
}
