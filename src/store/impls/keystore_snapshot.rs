use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use crate::store::enums::load_error::LoadError;
use crate::store::enums::store_format::StoreFormat;
use crate::store::store::{parse_certificates, parse_private_key, read_store_file, verify_digest, DEFAULT_ALIAS};
use crate::store::structs::keystore_entry::KeystoreEntry;
use crate::store::structs::keystore_manifest::KeystoreManifest;
use crate::store::structs::keystore_snapshot::KeystoreSnapshot;

impl std::fmt::Debug for KeystoreSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystoreSnapshot")
            .field("entries_count", &self.entries.len())
            .field("aliases", &self.entries.keys().collect::<Vec<_>>())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl KeystoreSnapshot {
    /// Loads a keystore file into a fully populated snapshot.
    ///
    /// Fails without producing a snapshot on a missing file (`NotFound`),
    /// a filesystem error (`Unreadable`), or anything that cannot be decoded
    /// as the declared format, wrong passwords included (`Corrupt`). A
    /// partial snapshot is never returned.
    pub fn load(
        path: &Path,
        format: StoreFormat,
        store_password: Option<&str>,
        key_password: Option<&str>,
    ) -> Result<KeystoreSnapshot, LoadError> {
        let raw = read_store_file(path)?;
        match format {
            StoreFormat::toml => Self::from_manifest(&raw, store_password, key_password),
            StoreFormat::pem => Self::from_pem_bundle(&raw),
        }
    }

    fn from_manifest(
        raw: &[u8],
        store_password: Option<&str>,
        key_password: Option<&str>,
    ) -> Result<KeystoreSnapshot, LoadError> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| LoadError::Corrupt(e.to_string()))?;
        let manifest: KeystoreManifest = toml::from_str(text)
            .map_err(|e| LoadError::Corrupt(e.to_string()))?;
        verify_digest(manifest.password.as_deref(), store_password, "Store password")?;
        if manifest.entries.is_empty() {
            return Err(LoadError::Corrupt(String::from("No entries in keystore manifest")));
        }
        let mut entries = HashMap::new();
        for (alias, entry) in &manifest.entries {
            verify_digest(entry.key_password.as_deref(), key_password, "Key password")?;
            let key = parse_private_key(entry.key.as_bytes())?;
            let chain = parse_certificates(entry.chain.as_bytes())?;
            if chain.is_empty() {
                return Err(LoadError::Corrupt(format!("No certificates for alias '{}'", alias)));
            }
            entries.insert(alias.clone(), Arc::new(KeystoreEntry { key, chain }));
        }
        Ok(KeystoreSnapshot {
            entries,
            loaded_at: chrono::Utc::now(),
        })
    }

    fn from_pem_bundle(raw: &[u8]) -> Result<KeystoreSnapshot, LoadError> {
        let chain = parse_certificates(raw)?;
        if chain.is_empty() {
            return Err(LoadError::Corrupt(String::from("No certificates found in file")));
        }
        let key = parse_private_key(raw)?;
        let mut entries = HashMap::new();
        entries.insert(String::from(DEFAULT_ALIAS), Arc::new(KeystoreEntry { key, chain }));
        Ok(KeystoreSnapshot {
            entries,
            loaded_at: chrono::Utc::now(),
        })
    }
}
