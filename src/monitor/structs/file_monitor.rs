use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use crate::monitor::monitor::ReloadTarget;
use crate::monitor::structs::monitor_stats::MonitorStats;

/// Polls one file's modification time at a fixed interval and calls the
/// reload target when it changes.
///
/// One monitor drives exactly one target; a keystore and a truststore get
/// one monitor each. The monitor owns its watch state exclusively; the
/// target's snapshot is only ever touched through `ReloadTarget::reload`.
pub struct FileMonitor {
    pub(crate) path: PathBuf,
    pub(crate) interval: Duration,
    pub(crate) target: Arc<dyn ReloadTarget>,
    pub(crate) stats: Arc<MonitorStats>,
}
