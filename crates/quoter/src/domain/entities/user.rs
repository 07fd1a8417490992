//! User Identity and Session
//!
//! Accounts and sessions are created by the external auth collaborator;
//! this application only resolves them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resolved caller of an authenticated request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: Uuid,
    pub email: String,
}

/// A session token issued by the auth collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session is still usable at `now`
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            token: "tok".to_string(),
            user_id: Uuid::new_v4(),
            expires_at,
        }
    }

    #[test]
    fn test_session_without_expiry_is_live() {
        assert!(session(None).is_live(Utc::now()));
    }

    #[test]
    fn test_expired_session_is_not_live() {
        let now = Utc::now();
        assert!(!session(Some(now - Duration::minutes(1))).is_live(now));
        assert!(session(Some(now + Duration::minutes(1))).is_live(now));
    }
}
