use serde::{Deserialize, Serialize};
use crate::config::structs::keystore_config::KeystoreConfig;
use crate::config::structs::truststore_config::TruststoreConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub monitor_interval: u64,
    pub keystore: Option<KeystoreConfig>,
    pub truststore: Option<TruststoreConfig>,
}
