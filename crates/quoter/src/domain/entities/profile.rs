//! Profile - User Display Settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user profile: display name, bio and avatar. Keyed by the auth
/// collaborator's user id; one row per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Empty profile for a user that has never saved settings
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            full_name: None,
            bio: None,
            avatar_url: None,
            updated_at: Utc::now(),
        }
    }
}
