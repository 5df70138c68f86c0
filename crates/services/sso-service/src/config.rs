//! SSO service configuration.

use std::env;

use common::{ServiceConfig, TokenConfig};

/// SSO service configuration.
#[derive(Debug, Clone)]
pub struct SsoServiceConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// Token issuance settings
    pub token: TokenConfig,
    /// Client apps seeded into the store at startup: (id, secret)
    pub apps: Vec<(i32, String)>,
}

impl SsoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let service = ServiceConfig {
            service_name: "sso-service".to_string(),
            host: env::var("SSO_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SSO_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(50051),
            log_level: env::var("SSO_SERVICE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let token = TokenConfig {
            ttl_seconds: env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or_else(|| TokenConfig::default().ttl_seconds),
        };

        let apps = env::var("SSO_APP_SECRETS")
            .map(|v| parse_app_secrets(&v))
            .unwrap_or_default();

        Self {
            service,
            token,
            apps,
        }
    }

    /// Token validity window.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token.ttl_seconds)
    }
}

impl Default for SsoServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "sso-service".to_string(),
                ..ServiceConfig::default()
            },
            token: TokenConfig::default(),
            apps: Vec::new(),
        }
    }
}

/// Parse "id=secret" pairs separated by commas, skipping malformed entries.
fn parse_app_secrets(raw: &str) -> Vec<(i32, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (id, secret) = pair.split_once('=')?;
            let id = id.trim().parse().ok()?;
            let secret = secret.trim();
            if secret.is_empty() {
                return None;
            }
            Some((id, secret.to_string()))
        })
        .collect()
}
