//! PostgreSQL implementation of QuoteRepository
//!
//! Owner scoping is enforced in the SQL itself: mutating statements and
//! per-user reads all filter on user_id, so a caller can never touch
//! another user's rows regardless of what the handler passes down.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use quoter::{DomainError, Quote, QuoteRepository};

/// PostgreSQL implementation of QuoteRepository
pub struct PgQuoteRepository {
    pool: PgPool,
}

impl PgQuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: Uuid,
    user_id: Uuid,
    quote_text: String,
    author: String,
    topic: Option<String>,
    published: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            quote_text: row.quote_text,
            author: row.author,
            topic: row.topic,
            published: row.published,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    async fn save(&self, quote: &Quote) -> Result<Quote, DomainError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            INSERT INTO quotes (id, user_id, quote_text, author, topic, published, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(quote.id)
        .bind(quote.user_id)
        .bind(&quote.quote_text)
        .bind(&quote.author)
        .bind(&quote.topic)
        .bind(quote.published)
        .bind(quote.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Quote>, DomainError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT * FROM quotes
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_published(&self, limit: i64) -> Result<Vec<Quote>, DomainError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT * FROM quotes
            WHERE published = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn set_published(
        &self,
        id: Uuid,
        user_id: Uuid,
        published: bool,
    ) -> Result<Option<Quote>, DomainError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            UPDATE quotes
            SET published = $3
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
