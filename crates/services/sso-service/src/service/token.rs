//! Token issuance.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use domain::{App, AuthError, AuthResult, User};

/// Claims embedded in an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub uid: i64,
    /// App the token is scoped to
    pub app_id: i32,
    pub email: String,
    /// Expiration instant, seconds since the Unix epoch
    pub exp: i64,
}

/// Mints signed, time-limited tokens for a (user, app) pair.
///
/// Tokens are HS256-signed with the app's own secret, so a token minted for
/// one app cannot be verified or forged with another app's key. Issuance is
/// pure computation over its inputs and the current instant; nothing is
/// recorded server-side.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Build and sign a token; `exp` is the current instant plus the TTL.
    ///
    /// Fails only if the signing primitive fails.
    pub fn issue(&self, user: &User, app: &App) -> AuthResult<String> {
        let claims = Claims {
            uid: user.id,
            app_id: app.id,
            email: user.email.clone(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(app.secret.as_bytes()),
        )
        .map_err(|e| AuthError::internal(format!("Token signing failed: {}", e)))
    }
}
