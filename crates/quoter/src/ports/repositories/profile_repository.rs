//! Profile Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Profile};

/// Repository interface for user profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by user id
    async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Insert or update a profile (keyed by user id)
    async fn upsert(&self, profile: &Profile) -> Result<Profile, DomainError>;
}
