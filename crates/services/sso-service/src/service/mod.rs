//! Authentication service business logic.

mod auth_service;
mod token;

pub use auth_service::{AuthService, Authenticator};
pub use token::{Claims, TokenIssuer};
