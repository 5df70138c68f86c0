//! Storage contracts for users, apps, and admin flags.
//!
//! The service reads and creates records only through these traits; the
//! backing store owns record lifecycle and uniqueness enforcement. No
//! schema, connection, or query detail leaks past this boundary.

mod memory;

pub use memory::MemoryStorage;

use async_trait::async_trait;
use thiserror::Error;

use domain::{App, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage-level failures surfaced by the provider traits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    AppNotFound,

    #[error("Storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Create an internal storage error
    pub fn internal(msg: impl Into<String>) -> Self {
        StorageError::Internal(msg.into())
    }
}

/// Persists new user records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Save a new user and return the store-assigned id.
    ///
    /// Fails with [`StorageError::UserExists`] when the email is taken.
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<i64, StorageError>;
}

/// Reads user records and admin flags.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Look up a user by email.
    ///
    /// Fails with [`StorageError::UserNotFound`] when no such user exists.
    async fn user_by_email(&self, email: &str) -> Result<User, StorageError>;

    /// Report whether the user holds administrator privileges.
    ///
    /// Fails with [`StorageError::UserNotFound`] when no such user exists.
    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError>;
}

/// Reads registered client applications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Look up an app by id.
    ///
    /// Fails with [`StorageError::AppNotFound`] when no such app exists.
    async fn app_by_id(&self, app_id: i32) -> Result<App, StorageError>;
}
