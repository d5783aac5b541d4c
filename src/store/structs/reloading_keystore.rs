use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crate::store::enums::store_format::StoreFormat;
use crate::store::structs::keystore_snapshot::KeystoreSnapshot;

/// Hot-reloadable keystore provider.
///
/// Holds exactly one [`KeystoreSnapshot`] at a time. Constructed from one
/// successful load; afterwards the snapshot reference is replaced only by
/// `reload`, under a generation compare-and-set, so concurrent readers
/// always observe either the previous or the new snapshot in full.
pub struct ReloadingKeystore {
    pub(crate) format: StoreFormat,
    pub(crate) store_password: Option<String>,
    pub(crate) key_password: Option<String>,
    pub(crate) path: RwLock<PathBuf>,
    pub(crate) snapshot: RwLock<Arc<KeystoreSnapshot>>,
    pub(crate) generation: AtomicU64,
}
