//! Implementation blocks for monitor types.

/// Construction, tick handling, and task spawning for the file monitor.
pub mod file_monitor;

/// Counter access and recording for monitor statistics.
pub mod monitor_stats;
