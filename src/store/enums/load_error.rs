use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("Store file not found: {0}")]
    NotFound(String),
    #[error("Store file unreadable: {0}")]
    Unreadable(String),
    #[error("Store file corrupt: {0}")]
    Corrupt(String),
    #[error("Alias not found: {0}")]
    AliasNotFound(String),
}
