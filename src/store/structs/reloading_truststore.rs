use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crate::store::enums::store_format::StoreFormat;
use crate::store::structs::truststore_snapshot::TruststoreSnapshot;

/// Hot-reloadable truststore provider.
pub struct ReloadingTruststore {
    pub(crate) format: StoreFormat,
    pub(crate) password: Option<String>,
    pub(crate) path: RwLock<PathBuf>,
    pub(crate) snapshot: RwLock<Arc<TruststoreSnapshot>>,
    pub(crate) generation: AtomicU64,
}
