//! Error types for the store and registry boundaries
//!
//! Three categories cover everything the library can fail with:
//!
//! - `Validation`: a reading handed to `append` is malformed. Surfaced to
//!   the caller, never silently swallowed at the store boundary.
//! - `NotFound`: a sensor id outside the fixed registry. Recoverable; the
//!   UI reports it and keeps going.
//! - `Io`: an unexpected filesystem failure (permissions, disk full).
//!   Propagated as a hard error, since dropping a reading silently would
//!   break the durability the store exists for.
//!
//! A malformed backing file is deliberately NOT an error: the store
//! recovers it as an empty history and logs a warning (see
//! [`crate::store::ReadingStore::load_all`]).

use thiserror::Error;

/// Result type for store and registry operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by the reading store and the sensor registry
#[derive(Error, Debug)]
pub enum StoreError {
    /// A reading failed validation before being written
    #[error("invalid reading: field `{field}` is missing or out of range")]
    Validation {
        /// Name of the offending field
        field: &'static str,
    },

    /// Sensor id outside the fixed registry range
    #[error("sensor {id} not found")]
    NotFound {
        /// The id that was looked up
        id: u32,
    },

    /// Unexpected filesystem failure during read or write
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
