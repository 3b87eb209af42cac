//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, PostRecord, SessionSnapshot};

/// Identity/session provider. This layer reads identity and triggers sign-out,
/// it never mutates session state itself.
#[async_trait::async_trait]
pub trait SessionPort: Send + Sync {
    /// Latest snapshot. `loading == true` while identity is still resolving.
    async fn snapshot(&self) -> SessionSnapshot;

    /// End the session. Resolves once the provider has cleared it.
    async fn sign_out(&self) -> Result<(), DomainError>;
}

/// Router. Knows the current path and performs imperative navigation.
#[async_trait::async_trait]
pub trait RouterPort: Send + Sync {
    fn current_path(&self) -> String;

    async fn navigate(&self, path: &str) -> Result<(), DomainError>;
}

/// Zero-argument factory producing one category of blog posts.
pub trait PostGenerator: Send + Sync {
    /// Group name used in logs and validation errors.
    fn category(&self) -> &'static str;

    fn generate(&self) -> Vec<PostRecord>;
}
