//! # Credstore
//!
//! A hot-reloadable TLS credential provider built on rustls.
//!
//! ## Overview
//!
//! Credstore loads password-protected keystore and truststore files from disk
//! into immutable in-memory snapshots, serves those snapshots to any number of
//! concurrent readers (typically a TLS handshake layer), and replaces them
//! atomically when the files change on disk. A failed reload never disturbs
//! the material already being served: the last good snapshot stays installed
//! until a load succeeds again.
//!
//! ## Features
//!
//! - **Hot reload**: swap private keys and trusted certificates without
//!   restarting the consuming service or interrupting in-flight handshakes
//! - **Fail-safe**: corrupt or missing files are recorded as diagnostics,
//!   never served as empty or partial credential material
//! - **Lock-minimal reads**: snapshot access is a read-lock and an `Arc`
//!   clone; no allocation, no copy-on-read
//! - **rustls integration**: a `ResolvesServerCert` resolver and helpers for
//!   building `ServerConfig` and `RootCertStore` values
//! - **Polling monitor**: a cancellable background task that watches file
//!   modification times and drives reloads at a configurable interval
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use credstore::monitor::structs::file_monitor::FileMonitor;
//! use credstore::store::enums::store_format::StoreFormat;
//! use credstore::store::structs::reloading_keystore::ReloadingKeystore;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let keystore = Arc::new(ReloadingKeystore::new(
//!     StoreFormat::toml,
//!     "keystore.toml",
//!     Some(String::from("hunter2")),
//!     None,
//! )?);
//!
//! let monitor = FileMonitor::new("keystore.toml", Duration::from_secs(10), keystore.clone());
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let handle = monitor.spawn(shutdown_rx);
//!
//! let entry = keystore.private_key("server");
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`logging`] - Logging setup via fern
//! - [`monitor`] - Polling file monitor driving reloads
//! - [`store`] - Credential snapshots, reloadable providers, rustls glue

/// Configuration management module.
///
/// Handles loading, parsing, and saving configuration from TOML files,
/// covering log level, monitor cadence, and the watched keystore/truststore
/// locations and passwords.
pub mod config;

/// Logging setup module.
///
/// Initializes a fern dispatcher with colored levels and timestamped output,
/// using the log level from the configuration.
pub mod logging;

/// Polling file monitor module.
///
/// Provides the cancellable background task that tracks file modification
/// times and calls back into a reload target when a watched file changes,
/// along with the diagnostic counters it maintains.
pub mod monitor;

/// Credential store module.
///
/// Contains the store loaders, immutable snapshots, the reloadable keystore
/// and truststore providers, and the rustls certificate resolver.
pub mod store;
