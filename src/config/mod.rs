//! Configuration management module.
//!
//! This module handles loading, parsing, and saving the credstore
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file contains:
//! - **log_level**: Logging verbosity (`off` through `trace`)
//! - **monitor_interval**: Polling cadence for the file monitor, in seconds
//! - **keystore**: Optional watched keystore (path, format, passwords,
//!   default alias for the certificate resolver)
//! - **truststore**: Optional watched truststore (path, format, password)
//!
//! # Example
//!
//! ```rust,ignore
//! use credstore::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file("config.toml")?;
//!
//! // Generate and persist a default configuration
//! let default_config = Configuration::init();
//! Configuration::save_to_file("config.toml", &default_config)?;
//! ```

/// Configuration enumerations (error variants).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
