//! Quote - Saved Quote Record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quote saved by a user. Unpublished quotes are visible only to their
/// owner; published quotes appear in the shared feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quote_text: String,
    pub author: String,
    pub topic: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Create a new unpublished quote owned by `user_id`
    pub fn new(
        user_id: Uuid,
        quote_text: String,
        author: String,
        topic: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            quote_text,
            author,
            topic: topic.filter(|t| !t.trim().is_empty()),
            published: false,
            created_at: Utc::now(),
        }
    }
}
