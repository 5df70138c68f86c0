//! Error mapping for the gRPC boundary.
//!
//! The boundary alone decides how much detail is user-visible: validation
//! messages pass through, internal causal detail is logged here and replaced
//! with a generic message.

use domain::AuthError;
use tonic::Status;

/// Conversion from the domain error taxonomy to a gRPC status.
pub trait IntoStatus {
    fn into_status(self) -> Status;
}

impl IntoStatus for AuthError {
    fn into_status(self) -> Status {
        match self {
            AuthError::Validation(msg) => Status::invalid_argument(msg),
            AuthError::InvalidCredentials => Status::invalid_argument("Invalid credentials"),
            AuthError::InvalidAppId => Status::not_found("App not found"),
            AuthError::UserAlreadyExists => Status::already_exists("User already exists"),
            AuthError::UserNotFound => Status::not_found("User not found"),
            AuthError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                Status::internal("Internal error")
            }
        }
    }
}
