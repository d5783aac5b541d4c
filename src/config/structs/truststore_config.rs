use serde::{Deserialize, Serialize};
use crate::store::enums::store_format::StoreFormat;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TruststoreConfig {
    pub path: String,
    pub format: StoreFormat,
    pub password: Option<String>,
}
