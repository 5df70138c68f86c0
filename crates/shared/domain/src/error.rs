//! Domain-level errors.
//!
//! The closed set of failure kinds the authentication service can report.
//! Transport layers map these onto status codes; callers switch on the
//! variant, never on message content.

use thiserror::Error;

/// Authentication failure kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Malformed input caught before the service runs
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password at login; the two are never
    /// distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempted against an unknown app id
    #[error("Invalid app id")]
    InvalidAppId,

    /// Registration with an email already on file
    #[error("User already exists")]
    UserAlreadyExists,

    /// Admin check on an unknown user id
    #[error("User not found")]
    UserNotFound,

    /// Unexpected failure in hashing, signing, or the store
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AuthError::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AuthError::Internal(msg.into())
    }
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
