//! SSO Service Library
//!
//! Authentication for multiple client apps over gRPC: account registration,
//! login with app-scoped JWTs, and admin-privilege checks. Persistence sits
//! behind the narrow traits in [`storage`]; the bundled in-memory adapter
//! backs tests and single-process deployments.

pub mod config;
pub mod grpc;
pub mod service;
pub mod storage;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use domain::App;

use crate::config::SsoServiceConfig;
use crate::grpc::AuthGrpcService;
use crate::service::{Authenticator, TokenIssuer};
use crate::storage::MemoryStorage;

/// Run the service with configuration taken from the environment.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = SsoServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: SsoServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Seed the store with the configured client apps
    let storage = Arc::new(MemoryStorage::new());
    for (app_id, secret) in &config.apps {
        storage.insert_app(App::new(*app_id, secret.clone())).await;
    }

    let auth_service = Arc::new(Authenticator::new(
        storage.clone(),
        storage.clone(),
        storage,
        TokenIssuer::new(config.token_ttl()),
    ));

    let grpc_service = AuthGrpcService::new(auth_service);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("SSO service listening on {}", addr);

    Server::builder()
        .add_service(proto::AuthServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}
