//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Mapping from the domain error taxonomy to gRPC statuses
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::IntoStatus;
