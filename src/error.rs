use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(gymcal::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(gymcal::config))]
    Config(String),

    #[error("Token error: {0}")]
    #[diagnostic(code(gymcal::token))]
    Token(String),

    #[error("Gmail API error: {0}")]
    #[diagnostic(code(gymcal::gmail))]
    Gmail(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(gymcal::google_calendar))]
    GoogleCalendar(String),

    #[error(transparent)]
    #[diagnostic(code(gymcal::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(gymcal::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(gymcal::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type SyncResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create token errors
pub fn token_error(message: &str) -> Error {
    Error::Token(message.to_string())
}

/// Helper to create Gmail errors
pub fn gmail_error(message: &str) -> Error {
    Error::Gmail(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
