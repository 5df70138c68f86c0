//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Default validity window for issued tokens, in seconds
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;
