//! Error taxonomy for container and session operations.
//!
//! The taxonomy is small and uniform: duplicate keys, missing keys,
//! rejected input, and export serialization failures. Reading or removing
//! from an empty container is NOT an error: pop, dequeue, and peek return
//! `None` for that expected condition, and callers branch on it.
//!
//! No error is fatal: every operation leaves its container in a valid,
//! consistent state whether it succeeds or fails.

use thiserror::Error;

/// Result alias used across all satchel crates.
pub type SatchelResult<T> = Result<T, SatchelError>;

/// Errors returned by container and session operations.
///
/// All variants are returned as values; nothing here is ever panicked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SatchelError {
    /// Insert attempted with a key that is already present.
    ///
    /// The stored record is left untouched; callers that want to overwrite
    /// must go through the update path explicitly.
    #[error("key '{key}' already exists")]
    AlreadyExists {
        /// The conflicting key.
        key: String,
    },

    /// Update or remove attempted on a key that is not present.
    #[error("key '{key}' not found")]
    NotFound {
        /// The missing key.
        key: String,
    },

    /// Input rejected before it reached a container.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// An export document could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl SatchelError {
    /// Construct a [`SatchelError::AlreadyExists`] for the given key.
    pub fn already_exists(key: impl Into<String>) -> Self {
        SatchelError::AlreadyExists { key: key.into() }
    }

    /// Construct a [`SatchelError::NotFound`] for the given key.
    pub fn not_found(key: impl Into<String>) -> Self {
        SatchelError::NotFound { key: key.into() }
    }

    /// Construct a [`SatchelError::InvalidInput`] with the given reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SatchelError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Construct a [`SatchelError::Serialization`] from any error message.
    pub fn serialization(message: impl Into<String>) -> Self {
        SatchelError::Serialization(message.into())
    }

    /// True if this is the duplicate-key rejection.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, SatchelError::AlreadyExists { .. })
    }

    /// True if this is the missing-key rejection.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SatchelError::NotFound { .. })
    }
}
