use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::store::structs::credential_set::CredentialSet;

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("has_keystore", &self.keystore.is_some())
            .field("has_truststore", &self.truststore.is_some())
            .field("has_resolver", &self.resolver.is_some())
            .field("monitors_count", &self.monitors.len())
            .finish()
    }
}

impl CredentialSet {
    /// Spawns every pending monitor on the current runtime, all wired to the
    /// same shutdown channel. The monitors are consumed; calling this twice
    /// yields an empty vector.
    pub fn spawn_monitors(&mut self, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        self.monitors
            .drain(..)
            .map(|monitor| monitor.spawn(shutdown.clone()))
            .collect()
    }
}
