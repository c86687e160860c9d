//! Error type shared by every fallible map operation

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by [`LinearHashMap`](crate::LinearHashMap) operations.
///
/// `DuplicateKey` and `KeyNotFound` leave the map untouched and are safe to recover from.
/// `AllocationFailure` means bucket storage could not grow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key passed to `insert` is already stored in the map
    #[error("key already exists")]
    DuplicateKey,
    /// The key passed to a lookup or removal is not stored in the map
    #[error("key does not exist")]
    KeyNotFound,
    /// Bucket storage could not be grown
    #[error("bucket storage could not grow: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
