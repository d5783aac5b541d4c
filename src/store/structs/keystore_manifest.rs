use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk shape of a `toml` format keystore.
///
/// `password` and per-entry `key_password` carry hex SHA-1 digests of the
/// passwords required to open the store; see
/// [`crate::store::store::password_digest`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeystoreManifest {
    pub password: Option<String>,
    pub entries: HashMap<String, KeystoreManifestEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeystoreManifestEntry {
    pub key: String,
    pub chain: String,
    pub key_password: Option<String>,
}
