//! Client application entity.

use serde::{Deserialize, Serialize};

/// A client application registered with the auth backend.
///
/// Each app carries its own signing secret; a token minted for one app
/// cannot be verified or forged with another app's key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// Caller-supplied identifier, strictly positive
    pub id: i32,
    /// Per-app token signing secret
    #[serde(skip_serializing)]
    pub secret: String,
}

impl App {
    /// Create a new app record
    pub fn new(id: i32, secret: String) -> Self {
        Self { id, secret }
    }
}
