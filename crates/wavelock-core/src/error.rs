#![forbid(unsafe_code)]

//! Configuration error types.

use thiserror::Error;

use crate::layout::LockType;

/// Errors rejected at session-start time, before any tick is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("secret character {ch:?} is not valid for the {lock_type} lock")]
    InvalidSecretChar { lock_type: LockType, ch: char },
}
