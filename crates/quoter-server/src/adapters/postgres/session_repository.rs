//! PostgreSQL implementation of SessionRepository
//!
//! Reads the auth service's session and user tables; never writes them.
//! Expiry is checked in the domain (`Session::is_live`) so the rule has
//! one home.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use quoter::{DomainError, Session, SessionRepository, UserIdentity};

/// PostgreSQL implementation of SessionRepository
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SessionRow {
    token: String,
    user_id: Uuid,
    expires_at: Option<chrono::DateTime<chrono::Utc>>,
    email: String,
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn resolve(&self, token: &str) -> Result<Option<UserIdentity>, DomainError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT s.token, s.user_id, s.expires_at, u.email
            FROM sessions s
            INNER JOIN users u ON u.id = s.user_id
            WHERE s.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let session = Session {
            token: row.token,
            user_id: row.user_id,
            expires_at: row.expires_at,
        };

        if !session.is_live(chrono::Utc::now()) {
            return Ok(None);
        }

        Ok(Some(UserIdentity {
            user_id: session.user_id,
            email: row.email,
        }))
    }
}
