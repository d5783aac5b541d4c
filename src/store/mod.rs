//! Credential store module.
//!
//! This module loads keystore and truststore files into immutable snapshots
//! and serves them through thread-safe, hot-reloadable providers.
//!
//! # Features
//!
//! - Load aliased key/certificate material from TOML manifests or raw PEM
//!   bundles
//! - Atomic snapshot replacement: readers always observe one fully-formed
//!   snapshot, never a partially-updated one
//! - Fail-safe reloads: a load failure leaves the installed snapshot
//!   untouched
//! - Dynamic rustls certificate resolution that follows reloads
//!
//! # Store Formats
//!
//! Two on-disk formats are built in:
//! - `toml`: an aliased manifest with optional SHA-1 password digests,
//!   holding PEM-encoded keys and chains per alias
//! - `pem`: a raw PEM bundle; a certificate set for truststores, or one
//!   private key plus its chain under the `default` alias for keystores
//!
//! # Hot Reload
//!
//! Providers are constructed from one successful load and afterwards mutated
//! only through `reload`, which installs a freshly loaded snapshot under a
//! generation compare-and-set. The file monitor in [`crate::monitor`] drives
//! `reload` whenever the watched file's modification time changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use credstore::store::enums::store_format::StoreFormat;
//! use credstore::store::structs::reloading_keystore::ReloadingKeystore;
//!
//! let keystore = ReloadingKeystore::new(StoreFormat::toml, "keystore.toml", None, None)?;
//! let entry = keystore.private_key("server");
//! ```

/// Store enumerations (load errors, on-disk formats).
pub mod enums;

/// Store data structures (snapshots, manifests, providers, resolver).
pub mod structs;

/// Implementation blocks for store types.
pub mod impls;

/// Free helper functions (rustls glue, digests, bootstrap from config).
#[allow(clippy::module_inception)]
pub mod store;
