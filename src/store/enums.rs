//! Store enumerations.

/// Failure taxonomy for loading credential stores.
pub mod load_error;

/// On-disk store formats.
pub mod store_format;
