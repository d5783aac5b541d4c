use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::monitor::monitor::ReloadTarget;
use crate::store::enums::load_error::LoadError;
use crate::store::enums::store_format::StoreFormat;
use crate::store::structs::keystore_entry::KeystoreEntry;
use crate::store::structs::keystore_snapshot::KeystoreSnapshot;
use crate::store::structs::reloading_keystore::ReloadingKeystore;

impl std::fmt::Debug for ReloadingKeystore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.read();
        f.debug_struct("ReloadingKeystore")
            .field("format", &self.format)
            .field("path", &*self.path.read())
            .field("entries_count", &snapshot.entries.len())
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

impl ReloadingKeystore {
    /// Loads the keystore once and constructs the provider around it.
    ///
    /// Construction-time failure is fatal to the caller: without an initial
    /// good snapshot there is no prior state to fall back on, so no provider
    /// is produced.
    pub fn new(
        format: StoreFormat,
        path: &str,
        store_password: Option<String>,
        key_password: Option<String>,
    ) -> Result<ReloadingKeystore, LoadError> {
        let path = PathBuf::from(path);
        let snapshot = KeystoreSnapshot::load(
            &path,
            format,
            store_password.as_deref(),
            key_password.as_deref(),
        )?;
        info!(
            "[KEYSTORE] Loaded {} with {} entries",
            path.display(),
            snapshot.entries.len()
        );
        Ok(ReloadingKeystore {
            format,
            store_password,
            key_password,
            path: parking_lot::RwLock::new(path),
            snapshot: parking_lot::RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(1),
        })
    }

    /// Key and chain for an alias in the current snapshot, `None` when the
    /// alias is unknown. Never blocked by reload activity beyond the instant
    /// of the snapshot swap.
    pub fn private_key(&self, alias: &str) -> Option<Arc<KeystoreEntry>> {
        self.snapshot.read().entries.get(alias).cloned()
    }

    pub fn aliases(&self) -> Vec<String> {
        self.snapshot.read().entries.keys().cloned().collect()
    }

    /// The currently installed snapshot.
    pub fn snapshot(&self) -> Arc<KeystoreSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.snapshot.read().loaded_at
    }

    /// Monotonically increasing counter, bumped once per installed snapshot.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    /// Loads the file at `path` with the passwords captured at construction
    /// time and atomically installs the result.
    ///
    /// On failure the installed snapshot and generation are left untouched
    /// and the error is returned for the caller to record. An in-flight
    /// reload that completes after a newer snapshot was installed is
    /// discarded rather than allowed to regress it.
    pub fn reload(&self, path: &Path) -> Result<(), LoadError> {
        let observed = self.generation.load(Ordering::Acquire);
        let snapshot = KeystoreSnapshot::load(
            path,
            self.format,
            self.store_password.as_deref(),
            self.key_password.as_deref(),
        )?;
        let mut current = self.snapshot.write();
        if self
            .generation
            .compare_exchange(observed, observed + 1, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            *current = Arc::new(snapshot);
            *self.path.write() = path.to_path_buf();
            info!(
                "[KEYSTORE] Installed snapshot generation {} from {}",
                observed + 1,
                path.display()
            );
        } else {
            debug!(
                "[KEYSTORE] Discarded stale reload of {}",
                path.display()
            );
        }
        Ok(())
    }
}

impl ReloadTarget for ReloadingKeystore {
    fn reload(&self, path: &Path) -> Result<(), LoadError> {
        ReloadingKeystore::reload(self, path)
    }
}
