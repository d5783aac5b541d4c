//! Polling file monitor module.
//!
//! This module provides the background task that watches a credential file's
//! modification time and drives reloads on the provider that owns it.
//!
//! # Behavior
//!
//! - The first successful observation of the file only records a baseline
//!   modification time; the provider already carries its construction-time
//!   snapshot, so no reload and no diagnostic is produced
//! - A changed modification time triggers one reload call; the stored time
//!   is advanced whether or not the reload succeeds, so a bad file is
//!   reported once per change instead of once per tick
//! - A file that disappears after a known-good observation is reported as a
//!   `NotFound` failure while the provider keeps serving its last snapshot
//! - No reload failure ever stops the polling loop; only the shutdown
//!   channel does
//!
//! # Diagnostics
//!
//! Failures and successful reloads are counted in
//! [`structs::monitor_stats::MonitorStats`], shared through an `Arc` so
//! callers can poll them while the task runs; the same events are written to
//! the log under the `[MONITOR]` tag.
//!
//! # Example
//!
//! ```rust,ignore
//! use credstore::monitor::structs::file_monitor::FileMonitor;
//! use std::time::Duration;
//!
//! let monitor = FileMonitor::new("keystore.toml", Duration::from_secs(10), keystore);
//! let stats = monitor.stats();
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let handle = monitor.spawn(shutdown_rx);
//! ```

/// Monitor data structures.
pub mod structs;

/// Implementation blocks for monitor types.
pub mod impls;

/// The reload target seam between monitor and providers.
#[allow(clippy::module_inception)]
pub mod monitor;

#[cfg(test)]
mod tests;
