#![forbid(unsafe_code)]

//! Lock configuration: validated before a session starts.
//!
//! The setup flow collects a lock type and a secret, then calls
//! [`LockConfig::new`]. Validation is fail-fast: an empty secret or a secret
//! containing a character the lock type cannot enter is rejected here, so the
//! session state machine never sees an invalid configuration.

use crate::error::ConfigError;
use crate::layout::LockType;

/// Validated lock type + secret for one or more unlock sessions.
///
/// Immutable after construction. The secret is held in plaintext; protecting
/// it cryptographically is out of scope for this core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockConfig {
    lock_type: LockType,
    secret: Vec<char>,
}

impl LockConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptySecret`] if `secret` is empty, or
    /// [`ConfigError::InvalidSecretChar`] if any character cannot be entered
    /// on the chosen lock type (only decimal digits are enterable today).
    pub fn new(lock_type: LockType, secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        // Both lock types enter digit labels; the pattern grid reuses the
        // 1-9 node numbering when it grows real geometry.
        if let Some(ch) = secret.chars().find(|ch| !ch.is_ascii_digit()) {
            return Err(ConfigError::InvalidSecretChar { lock_type, ch });
        }
        Ok(Self {
            lock_type,
            secret: secret.chars().collect(),
        })
    }

    /// The lock type this configuration selects.
    #[must_use]
    pub const fn lock_type(&self) -> LockType {
        self.lock_type
    }

    /// The secret as an ordered label sequence.
    #[must_use]
    pub fn secret(&self) -> &[char] {
        &self.secret
    }

    /// Number of labels the user must enter.
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LockConfig, LockType};

    #[test]
    fn accepts_digit_secret() {
        let config = LockConfig::new(LockType::Number, "1234").unwrap();
        assert_eq!(config.lock_type(), LockType::Number);
        assert_eq!(config.secret(), &['1', '2', '3', '4']);
        assert_eq!(config.secret_len(), 4);
    }

    #[test]
    fn rejects_empty_secret() {
        assert_eq!(
            LockConfig::new(LockType::Number, ""),
            Err(ConfigError::EmptySecret)
        );
    }

    #[test]
    fn rejects_non_digit_secret() {
        assert_eq!(
            LockConfig::new(LockType::Number, "12a4"),
            Err(ConfigError::InvalidSecretChar {
                lock_type: LockType::Number,
                ch: 'a',
            })
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit: is_numeric but not an enterable label.
        assert!(LockConfig::new(LockType::Number, "١٢٣").is_err());
    }

    #[test]
    fn pattern_lock_accepts_digits_for_future_grid() {
        assert!(LockConfig::new(LockType::Pattern, "159").is_ok());
    }
}
