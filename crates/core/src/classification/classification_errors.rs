//! Error types for sector classification.

use thiserror::Error;

/// Errors raised by classification internals.
///
/// `classify` absorbs these and falls back to the error-tagged default
/// annotation; they only cross the API boundary on override-store writes.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("override cache lock poisoned")]
    LockPoisoned,

    #[error("override store operation failed: {0}")]
    Store(String),
}
