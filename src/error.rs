//! Error types for tree operations.
//!
//! There is exactly one way a tree operation can fail: inserting a key
//! that is already present. Everything else is total over its valid input
//! domain - a missing key during `search` or `delete` is a normal outcome,
//! not an error.

use thiserror::Error;

/// Returned by [`Tree::insert`][crate::Tree::insert] when the key is
/// already present. The rejected key is handed back to the caller and the
/// tree is guaranteed unmodified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("duplicate key: {key}")]
pub struct DuplicateKeyError<K> {
    /// The key that was rejected.
    pub key: K,
}
