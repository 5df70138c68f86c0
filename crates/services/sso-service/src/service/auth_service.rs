//! Authentication core: registration, credential verification, and
//! privilege lookup over the storage traits.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use domain::{AuthError, AuthResult, Password};

use crate::service::TokenIssuer;
use crate::storage::{AppProvider, StorageError, UserProvider, UserSaver};

/// Hash verified when a login names an unknown email, so unknown-email and
/// wrong-password failures take the same verification path.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$cGxhY2Vob2xkZXI$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication operations exposed to transports.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return the store-assigned id.
    async fn register(&self, email: &str, password: &str) -> AuthResult<i64>;

    /// Check credentials and mint a token scoped to the given app.
    async fn login(&self, email: &str, password: &str, app_id: i32) -> AuthResult<String>;

    /// Report whether the user holds administrator privileges.
    async fn is_admin(&self, user_id: i64) -> AuthResult<bool>;
}

/// Concrete [`AuthService`] over the storage traits and a token issuer.
///
/// Stateless: every decision is re-derived from the store, so any number of
/// instances can serve concurrently without coordination, and no resource
/// outlives a single call.
pub struct Authenticator {
    user_saver: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    app_provider: Arc<dyn AppProvider>,
    token_issuer: TokenIssuer,
}

impl Authenticator {
    /// Create a new authenticator with its collaborators injected.
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        token_issuer: TokenIssuer,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            token_issuer,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, email: &str, password: &str) -> AuthResult<i64> {
        info!(email, "registering user");

        let password_hash = Password::new(password)?.into_string();

        match self.user_saver.save_user(email, &password_hash).await {
            Ok(user_id) => {
                info!(email, user_id, "user registered");
                Ok(user_id)
            }
            Err(StorageError::UserExists) => {
                warn!(email, "user already exists");
                Err(AuthError::UserAlreadyExists)
            }
            Err(e) => Err(AuthError::internal(format!("Failed to save user: {}", e))),
        }
    }

    async fn login(&self, email: &str, password: &str, app_id: i32) -> AuthResult<String> {
        info!(email, app_id, "attempting login");

        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => Some(user),
            Err(StorageError::UserNotFound) => None,
            Err(e) => return Err(AuthError::internal(format!("Failed to get user: {}", e))),
        };

        // Unknown email still runs a verification, so the two credential
        // failures are indistinguishable in timing as well as in kind.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH),
        };
        let password_valid = stored.verify(password);

        let Some(user) = user.filter(|_| password_valid) else {
            warn!(email, "invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        let app = match self.app_provider.app_by_id(app_id).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                warn!(app_id, "unknown app id");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => return Err(AuthError::internal(format!("Failed to get app: {}", e))),
        };

        let token = self.token_issuer.issue(&user, &app)?;
        info!(email, user_id = user.id, app_id, "user logged in");

        Ok(token)
    }

    async fn is_admin(&self, user_id: i64) -> AuthResult<bool> {
        info!(user_id, "checking admin flag");

        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => {
                info!(user_id, is_admin, "admin flag checked");
                Ok(is_admin)
            }
            Err(StorageError::UserNotFound) => Err(AuthError::UserNotFound),
            Err(e) => Err(AuthError::internal(format!(
                "Failed to check admin flag: {}",
                e
            ))),
        }
    }
}
