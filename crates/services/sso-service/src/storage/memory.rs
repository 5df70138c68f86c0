//! In-memory storage adapter.
//!
//! Backs the service in tests and single-process deployments. A real
//! deployment substitutes its own implementations of the storage traits;
//! nothing in the service layer knows the difference.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{App, User};

use super::{AppProvider, StorageError, UserProvider, UserSaver};

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    is_admin: bool,
}

/// Hash-map backed store with sequential user id assignment.
pub struct MemoryStorage {
    /// Users keyed by email; uniqueness of emails falls out of the map
    users: RwLock<HashMap<String, UserRecord>>,
    apps: RwLock<HashMap<i32, App>>,
    next_user_id: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            apps: RwLock::new(HashMap::new()),
            next_user_id: AtomicI64::new(1),
        }
    }

    /// Register a client app and its signing secret.
    pub async fn insert_app(&self, app: App) {
        self.apps.write().await.insert(app.id, app);
    }

    /// Grant or revoke administrator privileges.
    pub async fn set_admin(&self, user_id: i64, is_admin: bool) -> Result<(), StorageError> {
        let mut users = self.users.write().await;
        let record = users
            .values_mut()
            .find(|r| r.user.id == user_id)
            .ok_or(StorageError::UserNotFound)?;
        record.is_admin = is_admin;
        Ok(())
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserSaver for MemoryStorage {
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<i64, StorageError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(StorageError::UserExists);
        }

        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        users.insert(
            email.to_string(),
            UserRecord {
                user: User::new(id, email.to_string(), password_hash.to_string()),
                is_admin: false,
            },
        );

        Ok(id)
    }
}

#[async_trait]
impl UserProvider for MemoryStorage {
    async fn user_by_email(&self, email: &str) -> Result<User, StorageError> {
        self.users
            .read()
            .await
            .get(email)
            .map(|r| r.user.clone())
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        self.users
            .read()
            .await
            .values()
            .find(|r| r.user.id == user_id)
            .map(|r| r.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

#[async_trait]
impl AppProvider for MemoryStorage {
    async fn app_by_id(&self, app_id: i32) -> Result<App, StorageError> {
        self.apps
            .read()
            .await
            .get(&app_id)
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}
