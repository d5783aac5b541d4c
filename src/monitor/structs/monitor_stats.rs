use parking_lot::RwLock;
use std::sync::atomic::AtomicU64;
use crate::store::enums::load_error::LoadError;

/// Reload outcome counters for one monitored file.
///
/// The only observable side effect of a failed reload, next to the error
/// log entry; callers poll these to distinguish failure from normal
/// operation.
pub struct MonitorStats {
    pub(crate) completed_reloads: AtomicU64,
    pub(crate) failed_reloads: AtomicU64,
    pub(crate) last_failure: RwLock<Option<LoadError>>,
}
