//! Session Repository Port
//!
//! Sessions are issued by the external auth collaborator; this port only
//! resolves a presented token to the identity it belongs to.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, UserIdentity};

/// Read-only interface over the auth collaborator's session store
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolve a session token to a user identity.
    /// Returns None for unknown or expired tokens.
    async fn resolve(&self, token: &str) -> Result<Option<UserIdentity>, DomainError>;
}
