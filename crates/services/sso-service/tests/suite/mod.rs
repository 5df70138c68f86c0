//! Test harness: an in-process gRPC server over seeded in-memory storage.

use std::sync::Arc;

use chrono::Duration;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};

use domain::App;
use proto::{AuthClient, AuthServer};
use sso_service_lib::grpc::AuthGrpcService;
use sso_service_lib::service::{Authenticator, TokenIssuer};
use sso_service_lib::storage::MemoryStorage;

pub const TEST_APP_ID: i32 = 1;
pub const TEST_APP_SECRET: &str = "test-secret";
pub const TOKEN_TTL_SECONDS: i64 = 3600;

pub struct Suite {
    pub client: AuthClient<Channel>,
    pub storage: Arc<MemoryStorage>,
}

impl Suite {
    /// Start a server on an ephemeral port and connect a client to it.
    pub async fn start() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .insert_app(App::new(TEST_APP_ID, TEST_APP_SECRET.to_string()))
            .await;

        let auth_service = Arc::new(Authenticator::new(
            storage.clone(),
            storage.clone(),
            storage.clone(),
            TokenIssuer::new(Duration::seconds(TOKEN_TTL_SECONDS)),
        ));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(
            Server::builder()
                .add_service(AuthServer::new(AuthGrpcService::new(auth_service)))
                .serve_with_incoming(TcpListenerStream::new(listener)),
        );

        let client = AuthClient::connect(format!("http://{}", addr))
            .await
            .expect("gRPC server connection error");

        Self { client, storage }
    }
}
