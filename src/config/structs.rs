//! Configuration data structures.
//!
//! This module contains the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Watched keystore configuration (path, format, passwords, default alias).
pub mod keystore_config;

/// Watched truststore configuration (path, format, password).
pub mod truststore_config;
