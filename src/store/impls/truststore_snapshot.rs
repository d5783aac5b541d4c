use std::path::Path;
use crate::store::enums::load_error::LoadError;
use crate::store::enums::store_format::StoreFormat;
use crate::store::store::{parse_certificates, read_store_file, verify_digest};
use crate::store::structs::truststore_manifest::TruststoreManifest;
use crate::store::structs::truststore_snapshot::TruststoreSnapshot;

impl std::fmt::Debug for TruststoreSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruststoreSnapshot")
            .field("certificates_count", &self.certificates.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl TruststoreSnapshot {
    /// Loads a truststore file into a fully populated snapshot; same failure
    /// taxonomy as the keystore loader.
    pub fn load(
        path: &Path,
        format: StoreFormat,
        password: Option<&str>,
    ) -> Result<TruststoreSnapshot, LoadError> {
        let raw = read_store_file(path)?;
        let certificates = match format {
            StoreFormat::toml => {
                let text = std::str::from_utf8(&raw)
                    .map_err(|e| LoadError::Corrupt(e.to_string()))?;
                let manifest: TruststoreManifest = toml::from_str(text)
                    .map_err(|e| LoadError::Corrupt(e.to_string()))?;
                verify_digest(manifest.password.as_deref(), password, "Store password")?;
                let mut certificates = Vec::new();
                for pem in manifest.certificates.values() {
                    certificates.extend(parse_certificates(pem.as_bytes())?);
                }
                certificates
            }
            StoreFormat::pem => parse_certificates(&raw)?,
        };
        if certificates.is_empty() {
            return Err(LoadError::Corrupt(String::from("No certificates found in file")));
        }
        Ok(TruststoreSnapshot {
            certificates,
            loaded_at: chrono::Utc::now(),
        })
    }
}
