//! Implementation blocks for store types.

/// Loading and Debug for keystore snapshots.
pub mod keystore_snapshot;

/// Loading and Debug for truststore snapshots.
pub mod truststore_snapshot;

/// Construction, reads, and reload for the keystore provider.
pub mod reloading_keystore;

/// Construction, reads, and reload for the truststore provider.
pub mod reloading_truststore;

/// Certificate resolution and cache refresh for the rustls resolver.
pub mod reloading_cert_resolver;

/// Monitor spawning for assembled credential sets.
pub mod credential_set;
