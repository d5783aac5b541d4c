use parking_lot::RwLock;
use std::sync::Arc;
use crate::store::structs::reloading_keystore::ReloadingKeystore;

/// rustls `ResolvesServerCert` implementation bound to one alias of a
/// reloadable keystore.
///
/// The built `CertifiedKey` is cached keyed by the keystore generation and
/// rebuilt lazily after a reload moves the generation forward.
pub struct ReloadingCertResolver {
    pub(crate) keystore: Arc<ReloadingKeystore>,
    pub(crate) alias: String,
    pub(crate) cached_key: RwLock<Option<(u64, Arc<rustls::sign::CertifiedKey>)>>,
}
