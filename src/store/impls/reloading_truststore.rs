use log::{debug, info};
use rustls::pki_types::CertificateDer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::monitor::monitor::ReloadTarget;
use crate::store::enums::load_error::LoadError;
use crate::store::enums::store_format::StoreFormat;
use crate::store::structs::reloading_truststore::ReloadingTruststore;
use crate::store::structs::truststore_snapshot::TruststoreSnapshot;

impl std::fmt::Debug for ReloadingTruststore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.read();
        f.debug_struct("ReloadingTruststore")
            .field("format", &self.format)
            .field("path", &*self.path.read())
            .field("certificates_count", &snapshot.certificates.len())
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

impl ReloadingTruststore {
    /// Loads the truststore once and constructs the provider around it;
    /// construction-time failure produces no provider.
    pub fn new(
        format: StoreFormat,
        path: &str,
        password: Option<String>,
    ) -> Result<ReloadingTruststore, LoadError> {
        let path = PathBuf::from(path);
        let snapshot = TruststoreSnapshot::load(&path, format, password.as_deref())?;
        info!(
            "[TRUSTSTORE] Loaded {} with {} certificates",
            path.display(),
            snapshot.certificates.len()
        );
        Ok(ReloadingTruststore {
            format,
            password,
            path: parking_lot::RwLock::new(path),
            snapshot: parking_lot::RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(1),
        })
    }

    /// The trusted certificates of the current snapshot.
    pub fn certificates(&self) -> Vec<CertificateDer<'static>> {
        self.snapshot.read().certificates.clone()
    }

    /// The currently installed snapshot.
    pub fn snapshot(&self) -> Arc<TruststoreSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.snapshot.read().loaded_at
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    /// Same contract as [`crate::store::structs::reloading_keystore::ReloadingKeystore::reload`].
    pub fn reload(&self, path: &Path) -> Result<(), LoadError> {
        let observed = self.generation.load(Ordering::Acquire);
        let snapshot = TruststoreSnapshot::load(path, self.format, self.password.as_deref())?;
        let mut current = self.snapshot.write();
        if self
            .generation
            .compare_exchange(observed, observed + 1, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            *current = Arc::new(snapshot);
            *self.path.write() = path.to_path_buf();
            info!(
                "[TRUSTSTORE] Installed snapshot generation {} from {}",
                observed + 1,
                path.display()
            );
        } else {
            debug!(
                "[TRUSTSTORE] Discarded stale reload of {}",
                path.display()
            );
        }
        Ok(())
    }
}

impl ReloadTarget for ReloadingTruststore {
    fn reload(&self, path: &Path) -> Result<(), LoadError> {
        ReloadingTruststore::reload(self, path)
    }
}
