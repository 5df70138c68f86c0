//! gRPC protocol buffer definitions.
//!
//! Generated service definitions for Auth: user registration, login with
//! app-scoped tokens, and admin checks.

/// Authentication service definitions.
pub mod sso {
    tonic::include_proto!("sso");
}

// Re-export commonly used items
pub use sso::auth_client::AuthClient;
pub use sso::auth_server::{Auth, AuthServer};
