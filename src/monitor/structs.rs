//! Monitor data structures.

/// The polling monitor for one watched file.
pub mod file_monitor;

/// Reload outcome counters shared with the monitor's owner.
pub mod monitor_stats;
