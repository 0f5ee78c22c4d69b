//! Error types for fetcher-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the materialization engine
    #[error(transparent)]
    Engine(#[from] fetcher_engine::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Payload parse error
    #[error("Failed to parse payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Tenant config parse error
    #[error("Failed to parse tenant config: {0}")]
    Config(#[from] toml::de::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
