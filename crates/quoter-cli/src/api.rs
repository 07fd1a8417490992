//! Quoter API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Quoter
pub struct QuoterClient {
    client: Client,
    base_url: String,
    token: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct GenerateQuoteRequest {
    pub topic: String,
    pub tone: String,
    #[serde(rename = "authorStyle")]
    pub author_style: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuoteResponse {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub quote_text: String,
    pub author: String,
    pub topic: Option<String>,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct SaveQuoteRequest {
    pub quote_text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
struct PublishQuoteRequest {
    published: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl QuoterClient {
    /// Create a new API client
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Test connection with health check (no auth required)
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate a quote
    pub async fn generate(
        &self,
        topic: &str,
        tone: &str,
        author_style: &str,
    ) -> Result<GenerateQuoteResponse> {
        let url = format!("{}/api/generate-quote", self.base_url);
        let body = GenerateQuoteRequest {
            topic: topic.to_string(),
            tone: tone.to_string(),
            author_style: author_style.to_string(),
        };
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// List the caller's saved quotes
    pub async fn list_quotes(&self) -> Result<Vec<QuoteResponse>> {
        let url = format!("{}/api/quotes", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// Save a quote
    pub async fn save_quote(&self, request: &SaveQuoteRequest) -> Result<QuoteResponse> {
        let url = format!("{}/api/quotes", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// Publish or unpublish a saved quote
    pub async fn set_published(&self, id: Uuid, published: bool) -> Result<QuoteResponse> {
        let url = format!("{}/api/quotes/{}/publish", self.base_url, id);
        let resp = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&PublishQuoteRequest { published })
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// Remove a saved quote
    pub async fn delete_quote(&self, id: Uuid) -> Result<()> {
        let url = format!("{}/api/quotes/{}", self.base_url, id);
        let resp = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        if !resp.status().is_success() {
            bail!("API error ({}): {}", resp.status(), Self::error_message(resp).await);
        }
        Ok(())
    }

    /// Published quotes from everyone
    pub async fn feed(&self) -> Result<Vec<QuoteResponse>> {
        let url = format!("{}/api/feed", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// The caller's profile
    pub async fn get_profile(&self) -> Result<ProfileResponse> {
        let url = format!("{}/api/profile", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    /// Update the caller's profile
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ProfileResponse> {
        let url = format!("{}/api/profile", self.base_url);
        let resp = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Quoter API")?;

        Self::parse(resp).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            bail!("API error ({}): {}", status, Self::error_message(resp).await);
        }

        resp.json().await.context("Failed to parse response")
    }

    async fn error_message(resp: reqwest::Response) -> String {
        let body = resp.text().await.unwrap_or_default();
        serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or(body)
    }
}
