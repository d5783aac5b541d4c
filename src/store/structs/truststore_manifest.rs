use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk shape of a `toml` format truststore: alias to PEM certificate(s).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TruststoreManifest {
    pub password: Option<String>,
    pub certificates: HashMap<String, String>,
}
