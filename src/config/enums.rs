//! Configuration enumerations.

/// Errors produced while loading or saving the configuration file.
pub mod configuration_error;
