//! Saved Quote DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use quoter::Quote;

/// Saved quote as returned to clients
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub quote_text: String,
    pub author: String,
    pub topic: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            quote_text: quote.quote_text,
            author: quote.author,
            topic: quote.topic,
            published: quote.published,
            created_at: quote.created_at,
        }
    }
}

/// Save quote request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveQuoteRequest {
    pub quote_text: String,
    pub author: String,
    pub topic: Option<String>,
}

/// Publish/unpublish request
#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishQuoteRequest {
    pub published: bool,
}
