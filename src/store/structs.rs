//! Store data structures.

/// One keystore entry: a private key and its certificate chain.
pub mod keystore_entry;

/// Immutable in-memory view of a loaded keystore.
pub mod keystore_snapshot;

/// Immutable in-memory view of a loaded truststore.
pub mod truststore_snapshot;

/// Serde shape of the TOML keystore manifest.
pub mod keystore_manifest;

/// Serde shape of the TOML truststore manifest.
pub mod truststore_manifest;

/// Hot-reloadable keystore provider.
pub mod reloading_keystore;

/// Hot-reloadable truststore provider.
pub mod reloading_truststore;

/// rustls certificate resolver backed by a reloadable keystore.
pub mod reloading_cert_resolver;

/// Providers and monitors assembled from a configuration.
pub mod credential_set;
