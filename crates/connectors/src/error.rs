use thiserror::Error;

/// Errors raised while assembling settings from environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    /// A variable is present but cannot be used.
    #[error("Invalid value '{value}' for setting {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
