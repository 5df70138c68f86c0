//! User entity.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Created once at registration and never mutated afterwards; the store owns
/// its lifecycle and uniqueness of the email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique email address, case-sensitive as stored
    pub email: String,
    /// Salted one-way hash of the password (PHC string)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }
}
