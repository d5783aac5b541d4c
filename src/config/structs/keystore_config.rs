use serde::{Deserialize, Serialize};
use crate::store::enums::store_format::StoreFormat;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeystoreConfig {
    pub path: String,
    pub format: StoreFormat,
    pub password: Option<String>,
    pub key_password: Option<String>,
    pub default_alias: Option<String>,
}
