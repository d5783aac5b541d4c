use std::sync::Arc;
use crate::monitor::structs::file_monitor::FileMonitor;
use crate::store::structs::reloading_cert_resolver::ReloadingCertResolver;
use crate::store::structs::reloading_keystore::ReloadingKeystore;
use crate::store::structs::reloading_truststore::ReloadingTruststore;

/// Providers and their file monitors, assembled from a configuration by
/// [`crate::store::store::create_from_config`].
///
/// When a keystore is configured the resolver is bound to its configured
/// default alias, ready for `create_server_config`.
pub struct CredentialSet {
    pub keystore: Option<Arc<ReloadingKeystore>>,
    pub truststore: Option<Arc<ReloadingTruststore>>,
    pub resolver: Option<Arc<ReloadingCertResolver>>,
    pub monitors: Vec<FileMonitor>,
}
