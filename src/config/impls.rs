//! Implementation blocks for configuration types.

/// Loading, saving, and default generation for the root configuration.
pub mod configuration;

/// Display/Error implementations for configuration errors.
pub mod configuration_error;
