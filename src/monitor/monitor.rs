use std::path::Path;
use crate::store::enums::load_error::LoadError;

/// Anything a [`crate::monitor::structs::file_monitor::FileMonitor`] can
/// drive reloads into.
///
/// Implementations must install the loaded material atomically on success
/// and leave their current state untouched on failure; both built-in
/// providers in [`crate::store`] follow that contract, and external store
/// formats can participate by implementing this trait.
pub trait ReloadTarget: Send + Sync {
    fn reload(&self, path: &Path) -> Result<(), LoadError>;
}
