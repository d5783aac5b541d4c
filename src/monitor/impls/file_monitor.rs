use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::monitor::monitor::ReloadTarget;
use crate::monitor::structs::file_monitor::FileMonitor;
use crate::monitor::structs::monitor_stats::MonitorStats;
use crate::store::enums::load_error::LoadError;

impl std::fmt::Debug for FileMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileMonitor")
            .field("path", &self.path)
            .field("interval", &self.interval)
            .finish()
    }
}

impl FileMonitor {
    pub fn new(
        path: impl Into<PathBuf>,
        interval: Duration,
        target: Arc<dyn ReloadTarget>,
    ) -> FileMonitor {
        FileMonitor {
            path: path.into(),
            interval,
            target,
            stats: Arc::new(MonitorStats::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle to the monitor's counters, valid for the task's whole
    /// lifetime. Take it before `spawn` consumes the monitor.
    pub fn stats(&self) -> Arc<MonitorStats> {
        self.stats.clone()
    }

    /// Starts the polling loop on the current runtime.
    ///
    /// The loop stops when the shutdown channel flips or its sender is
    /// dropped; an in-flight tick finishes first. Reload failures never stop
    /// the loop.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                "[MONITOR] Watching {} every {:?}",
                self.path.display(),
                self.interval
            );
            let mut last_seen: Option<SystemTime> = None;
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.changed() => {
                        info!("[MONITOR] Stopped watching {}", self.path.display());
                        return;
                    }
                    _ = ticker.tick() => {
                        self.tick(&mut last_seen);
                    }
                }
            }
        })
    }

    fn tick(&self, last_seen: &mut Option<SystemTime>) {
        let modified = std::fs::metadata(&self.path).and_then(|meta| meta.modified());
        match modified {
            Ok(mtime) => match *last_seen {
                None => {
                    // First observation is the baseline; the provider already
                    // holds its construction-time snapshot.
                    *last_seen = Some(mtime);
                }
                Some(previous) if previous == mtime => {}
                Some(_) => {
                    // Advance before reloading: a bad file is reported once
                    // per detected change, not on every tick after it.
                    *last_seen = Some(mtime);
                    match self.target.reload(&self.path) {
                        Ok(()) => {
                            self.stats.record_success();
                            info!("[MONITOR] Reloaded {}", self.path.display());
                        }
                        Err(err) => {
                            error!("[MONITOR] Failed to reload {}: {}", self.path.display(), err);
                            self.stats.record_failure(err);
                        }
                    }
                }
            },
            Err(err) => {
                // Stat failures before the first good observation stay
                // silent; afterwards they are reload failures.
                if last_seen.is_some() {
                    let failure = if err.kind() == std::io::ErrorKind::NotFound {
                        LoadError::NotFound(format!("{}: {}", self.path.display(), err))
                    } else {
                        LoadError::Unreadable(format!("{}: {}", self.path.display(), err))
                    };
                    error!("[MONITOR] Cannot stat {}: {}", self.path.display(), failure);
                    self.stats.record_failure(failure);
                }
            }
        }
    }
}
