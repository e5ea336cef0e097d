//! Error types for Buddy core operations.

use thiserror::Error;

use crate::contact::ContactId;

/// Errors that can occur in the Buddy core.
///
/// None of these are fatal to the process. Fetch failures surface as an
/// inline error state in the UI, host failures are only logged.
#[derive(Debug, Error)]
pub enum BuddyError {
    /// The contact directory or message source could not be reached.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// The contact id is not known to the directory or roster.
    #[error("unknown contact: {0}")]
    UnknownContact(ContactId),

    /// The authentication collaborator rejected the credentials.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The host window rejected a command.
    #[error("host command failed: {0}")]
    HostCommandFailed(String),

    /// No async runtime is available to schedule a reply on.
    #[error("no runtime available to schedule replies")]
    SchedulerUnavailable,

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Buddy core operations.
pub type Result<T> = std::result::Result<T, BuddyError>;
