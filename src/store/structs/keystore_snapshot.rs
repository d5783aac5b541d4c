use std::collections::HashMap;
use std::sync::Arc;
use crate::store::structs::keystore_entry::KeystoreEntry;

/// One fully-loaded, immutable view of a keystore file.
///
/// Never mutated after construction; readers holding a reference keep seeing
/// consistent material even after the owning provider swaps in a newer
/// snapshot.
pub struct KeystoreSnapshot {
    pub entries: HashMap<String, Arc<KeystoreEntry>>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
