#![forbid(unsafe_code)]

use thiserror::Error;
use wavelock_core::ConfigError;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid lock configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no target labeled {label:?} in the {lock_type} layout")]
    UnknownLabel { lock_type: &'static str, label: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HarnessError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HarnessError;

    #[test]
    fn unknown_label_message_names_label_and_layout() {
        let err = HarnessError::UnknownLabel {
            lock_type: "number",
            label: '0',
        };
        assert_eq!(err.to_string(), "no target labeled '0' in the number layout");
    }
}
