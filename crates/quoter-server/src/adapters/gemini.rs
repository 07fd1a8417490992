//! Gemini text-generation adapter.
//!
//! Thin reqwest client over the Gemini `generateContent` REST endpoint.
//! The reply is returned as raw text; coercing it into a structured
//! result is the generation service's job.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use quoter::{DomainError, TextGenerator};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// TextGenerator backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiTextGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiTextGenerator {
    /// Creates a new generator using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        extract_reply_text(&payload).ok_or_else(|| {
            DomainError::MalformedResponse("Gemini returned no text candidates".to_string())
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================
// Helper Functions
// ============================================

fn extract_reply_text(root: &serde_json::Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExternalService(format!("Gemini API error ({}): {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_text_joins_candidate_parts() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "  first  "},
                        {"text": ""},
                        {"text": "second"}
                    ]
                }
            }]
        });
        assert_eq!(
            extract_reply_text(&payload).as_deref(),
            Some("first\n\nsecond")
        );
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        assert!(extract_reply_text(&json!({"candidates": []})).is_none());
        assert!(extract_reply_text(&json!({})).is_none());
    }

    #[test]
    fn test_http_error_prefers_json_message() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"Resource exhausted"}}"#.to_string(),
        );
        assert!(
            matches!(err, DomainError::ExternalService(msg) if msg.contains("Resource exhausted") && msg.contains("429"))
        );
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(err, DomainError::ExternalService(msg) if msg.contains("upstream down")));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }
}
