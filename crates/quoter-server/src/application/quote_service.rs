//! Quote Application Service (Use Case)
//!
//! Orchestrates saved-quote operations. Every operation is scoped to the
//! calling user; the feed is the one read that crosses owners and it only
//! ever sees published rows.

use std::sync::Arc;
use uuid::Uuid;

use quoter::{DomainError, GeneratedQuote, Quote, QuoteRepository, UserIdentity};

/// Saved quotes and the shared feed are capped the way the original
/// dashboard queries were.
const LIST_LIMIT: i64 = 50;

/// Application service for saved quotes
pub struct QuoteService<R: QuoteRepository> {
    repo: Arc<R>,
}

impl<R: QuoteRepository> QuoteService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Save a generated quote for the caller. Starts unpublished.
    pub async fn save(
        &self,
        user: &UserIdentity,
        generated: GeneratedQuote,
        topic: Option<String>,
    ) -> Result<Quote, DomainError> {
        let quote = Quote::new(user.user_id, generated.quote, generated.author, topic);
        let saved = self.repo.save(&quote).await?;

        tracing::info!("Saved quote {} for user {}", saved.id, user.user_id);

        Ok(saved)
    }

    /// The caller's saved quotes, newest first
    pub async fn history(&self, user: &UserIdentity) -> Result<Vec<Quote>, DomainError> {
        self.repo.list_for_user(user.user_id, LIST_LIMIT).await
    }

    /// Published quotes from everyone, newest first
    pub async fn feed(&self) -> Result<Vec<Quote>, DomainError> {
        self.repo.list_published(LIST_LIMIT).await
    }

    /// Publish or unpublish one of the caller's quotes
    pub async fn set_published(
        &self,
        user: &UserIdentity,
        id: Uuid,
        published: bool,
    ) -> Result<Quote, DomainError> {
        let updated = self
            .repo
            .set_published(id, user.user_id, published)
            .await?
            .ok_or_else(|| DomainError::not_found("Quote", id))?;

        tracing::info!(
            "Quote {} {} by user {}",
            id,
            if published { "published" } else { "unpublished" },
            user.user_id
        );

        Ok(updated)
    }

    /// Remove one of the caller's saved quotes
    pub async fn remove(&self, user: &UserIdentity, id: Uuid) -> Result<(), DomainError> {
        let deleted = self.repo.delete(id, user.user_id).await?;
        if !deleted {
            return Err(DomainError::not_found("Quote", id));
        }

        tracing::info!("Deleted quote {} for user {}", id, user.user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory repository that applies the same owner scoping the
    /// Postgres adapter enforces in SQL.
    #[derive(Default)]
    struct InMemoryQuoteRepository {
        quotes: Mutex<Vec<Quote>>,
    }

    #[async_trait]
    impl QuoteRepository for InMemoryQuoteRepository {
        async fn save(&self, quote: &Quote) -> Result<Quote, DomainError> {
            self.quotes.lock().unwrap().push(quote.clone());
            Ok(quote.clone())
        }

        async fn list_for_user(
            &self,
            user_id: Uuid,
            limit: i64,
        ) -> Result<Vec<Quote>, DomainError> {
            let mut quotes: Vec<Quote> = self
                .quotes
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.user_id == user_id)
                .cloned()
                .collect();
            quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            quotes.truncate(limit as usize);
            Ok(quotes)
        }

        async fn list_published(&self, limit: i64) -> Result<Vec<Quote>, DomainError> {
            let mut quotes: Vec<Quote> = self
                .quotes
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.published)
                .cloned()
                .collect();
            quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            quotes.truncate(limit as usize);
            Ok(quotes)
        }

        async fn set_published(
            &self,
            id: Uuid,
            user_id: Uuid,
            published: bool,
        ) -> Result<Option<Quote>, DomainError> {
            let mut quotes = self.quotes.lock().unwrap();
            for quote in quotes.iter_mut() {
                if quote.id == id && quote.user_id == user_id {
                    quote.published = published;
                    return Ok(Some(quote.clone()));
                }
            }
            Ok(None)
        }

        async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
            let mut quotes = self.quotes.lock().unwrap();
            let before = quotes.len();
            quotes.retain(|q| !(q.id == id && q.user_id == user_id));
            Ok(quotes.len() < before)
        }
    }

    fn user() -> UserIdentity {
        UserIdentity {
            user_id: Uuid::new_v4(),
            email: "quoter@example.com".to_string(),
        }
    }

    fn generated() -> GeneratedQuote {
        GeneratedQuote {
            quote: "Q".to_string(),
            author: "A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_starts_unpublished_and_owned() {
        let service = QuoteService::new(Arc::new(InMemoryQuoteRepository::default()));
        let caller = user();

        let saved = service
            .save(&caller, generated(), Some("focus".to_string()))
            .await
            .unwrap();

        assert!(!saved.published);
        assert_eq!(saved.user_id, caller.user_id);

        let history = service.history(&caller).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_publish_refuses_foreign_quote() {
        let service = QuoteService::new(Arc::new(InMemoryQuoteRepository::default()));
        let owner = user();
        let stranger = user();

        let saved = service.save(&owner, generated(), None).await.unwrap();

        let err = service
            .set_published(&stranger, saved.id, true)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        // The owner still can
        let published = service.set_published(&owner, saved.id, true).await.unwrap();
        assert!(published.published);
    }

    #[tokio::test]
    async fn test_remove_refuses_foreign_quote() {
        let service = QuoteService::new(Arc::new(InMemoryQuoteRepository::default()));
        let owner = user();
        let stranger = user();

        let saved = service.save(&owner, generated(), None).await.unwrap();

        let err = service.remove(&stranger, saved.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(service.history(&owner).await.unwrap().len(), 1);

        service.remove(&owner, saved.id).await.unwrap();
        assert!(service.history(&owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_only_contains_published_quotes() {
        let service = QuoteService::new(Arc::new(InMemoryQuoteRepository::default()));
        let caller = user();

        let first = service.save(&caller, generated(), None).await.unwrap();
        let _second = service.save(&caller, generated(), None).await.unwrap();
        service.set_published(&caller, first.id, true).await.unwrap();

        let feed = service.feed().await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, first.id);

        service
            .set_published(&caller, first.id, false)
            .await
            .unwrap();
        assert!(service.feed().await.unwrap().is_empty());
    }
}
