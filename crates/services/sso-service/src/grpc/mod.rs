//! gRPC surface for the authentication service.

mod auth_grpc;

pub use auth_grpc::AuthGrpcService;
