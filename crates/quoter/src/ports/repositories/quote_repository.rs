//! Quote Repository Port
//!
//! Abstract interface for quote persistence. Every owner-sensitive
//! operation takes the caller's user id so implementations can scope
//! rows to their owner.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Quote};

/// Repository interface for saved quotes
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Insert a quote
    async fn save(&self, quote: &Quote) -> Result<Quote, DomainError>;

    /// A user's saved quotes, newest first
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Quote>, DomainError>;

    /// Published quotes from all users, newest first
    async fn list_published(&self, limit: i64) -> Result<Vec<Quote>, DomainError>;

    /// Set the publish flag on a quote owned by `user_id`.
    /// Returns None when no such row exists for that owner.
    async fn set_published(
        &self,
        id: Uuid,
        user_id: Uuid,
        published: bool,
    ) -> Result<Option<Quote>, DomainError>;

    /// Delete a quote owned by `user_id`. Returns false when no such
    /// row exists for that owner.
    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;
}
