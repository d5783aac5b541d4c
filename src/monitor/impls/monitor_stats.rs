use std::sync::atomic::{AtomicU64, Ordering};
use crate::monitor::structs::monitor_stats::MonitorStats;
use crate::store::enums::load_error::LoadError;

impl std::fmt::Debug for MonitorStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorStats")
            .field("completed_reloads", &self.completed_reloads())
            .field("failed_reloads", &self.failed_reloads())
            .field("last_failure", &*self.last_failure.read())
            .finish()
    }
}

impl Default for MonitorStats {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorStats {
    pub fn new() -> MonitorStats {
        MonitorStats {
            completed_reloads: AtomicU64::new(0),
            failed_reloads: AtomicU64::new(0),
            last_failure: parking_lot::RwLock::new(None),
        }
    }

    pub fn completed_reloads(&self) -> u64 {
        self.completed_reloads.load(Ordering::Acquire)
    }

    pub fn failed_reloads(&self) -> u64 {
        self.failed_reloads.load(Ordering::Acquire)
    }

    pub fn last_failure(&self) -> Option<LoadError> {
        self.last_failure.read().clone()
    }

    pub(crate) fn record_success(&self) {
        self.completed_reloads.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_failure(&self, failure: LoadError) {
        self.failed_reloads.fetch_add(1, Ordering::AcqRel);
        *self.last_failure.write() = Some(failure);
    }
}
