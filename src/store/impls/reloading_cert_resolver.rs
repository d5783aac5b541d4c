use log::error;
use rustls::server::ResolvesServerCert;
use std::sync::Arc;
use crate::store::enums::load_error::LoadError;
use crate::store::structs::keystore_entry::KeystoreEntry;
use crate::store::structs::reloading_cert_resolver::ReloadingCertResolver;
use crate::store::structs::reloading_keystore::ReloadingKeystore;

impl std::fmt::Debug for ReloadingCertResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadingCertResolver")
            .field("alias", &self.alias)
            .field("has_cached_key", &self.cached_key.read().is_some())
            .finish()
    }
}

impl ReloadingCertResolver {
    /// Binds the resolver to one alias of a reloadable keystore and builds
    /// the initial certified key; fails when the alias is absent or its key
    /// is unusable.
    pub fn new(
        keystore: Arc<ReloadingKeystore>,
        alias: &str,
    ) -> Result<ReloadingCertResolver, LoadError> {
        let resolver = ReloadingCertResolver {
            keystore,
            alias: alias.to_string(),
            cached_key: parking_lot::RwLock::new(None),
        };
        resolver.refresh_cache()?;
        Ok(resolver)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn has_certificate(&self) -> bool {
        self.cached_key.read().is_some()
    }

    /// Rebuilds the certified key from the keystore's current snapshot and
    /// caches it against the snapshot generation.
    pub fn refresh_cache(&self) -> Result<Arc<rustls::sign::CertifiedKey>, LoadError> {
        let generation = self.keystore.generation();
        let entry = self
            .keystore
            .private_key(&self.alias)
            .ok_or_else(|| LoadError::AliasNotFound(self.alias.clone()))?;
        let certified_key = Arc::new(Self::entry_to_certified_key(&entry)?);
        *self.cached_key.write() = Some((generation, certified_key.clone()));
        Ok(certified_key)
    }

    fn entry_to_certified_key(
        entry: &KeystoreEntry,
    ) -> Result<rustls::sign::CertifiedKey, LoadError> {
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&entry.key)
            .map_err(|e| LoadError::Corrupt(format!("Unusable private key: {}", e)))?;
        Ok(rustls::sign::CertifiedKey::new(entry.chain.clone(), signing_key))
    }
}

impl ResolvesServerCert for ReloadingCertResolver {
    fn resolve(&self, _client_hello: rustls::server::ClientHello<'_>) -> Option<Arc<rustls::sign::CertifiedKey>> {
        let generation = self.keystore.generation();
        if let Some((cached_generation, certified_key)) = self.cached_key.read().clone() {
            if cached_generation == generation {
                return Some(certified_key);
            }
        }
        match self.refresh_cache() {
            Ok(certified_key) => Some(certified_key),
            Err(err) => {
                // Serve the last good key rather than failing the handshake.
                error!("[RESOLVER] Failed to refresh certificate for '{}': {}", self.alias, err);
                self.cached_key.read().clone().map(|(_, certified_key)| certified_key)
            }
        }
    }
}
