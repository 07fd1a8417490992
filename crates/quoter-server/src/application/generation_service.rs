//! Quote Generation Service (Use Case)
//!
//! Builds the prompt, makes exactly one provider call, and coerces the
//! free-text reply into a two-field result. Providers are not reliable
//! about format even when told to return bare JSON, so parsing is
//! strict-first with a brace-extraction fallback.

use std::sync::Arc;

use quoter::{DomainError, GeneratedQuote, GenerationRequest, TextGenerator};

/// Application service for quote generation
pub struct GenerationService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl GenerationService {
    /// The generator is injected at construction; `None` means no provider
    /// credential was configured and every generate call will fail with a
    /// configuration error before any outbound call.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Generate a quote for a validated caller.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedQuote, DomainError> {
        request.validate()?;

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| DomainError::Configuration("Missing Gemini API key".to_string()))?;

        let prompt = build_prompt(request);
        tracing::info!(
            "Generating quote via {} ({})",
            generator.provider_name(),
            generator.model_id()
        );

        let reply = generator.generate(&prompt).await?;
        coerce_reply(&reply)
    }
}

/// Literal interpolation of the three fields into the fixed instruction
/// template. The template tells the provider to return bare JSON; it
/// frequently does not comply, which is what `coerce_reply` is for.
fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are a world-class quotesmith.\n\n\
         Generate a short, original, and impactful quote. The quote should be about \
         the topic of \"{topic}\" and have a {tone} tone. Please attribute the quote \
         to a fictional author in the style of \"{author_style}\".\n\n\
         Return ONLY a single JSON object with two fields and no code fences or \
         commentary: {{\"quote\": string, \"author\": string}}.",
        topic = request.topic,
        tone = request.tone,
        author_style = request.author_style,
    )
}

/// Coerce a raw provider reply into `{quote, author}`.
///
/// 1. Trim, then strip a leading ``` marker (optionally tagged `json`,
///    case-insensitive) and a trailing ``` marker.
/// 2. Strict-parse the remainder as a single JSON object.
/// 3. On failure, strict-parse the greedy first-`{`-to-last-`}` substring.
/// 4. Require non-empty string `quote` and `author`; drop everything else.
fn coerce_reply(reply: &str) -> Result<GeneratedQuote, DomainError> {
    let cleaned = strip_code_fences(reply.trim());

    let parsed: serde_json::Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(_) => {
            let fragment = extract_braced(cleaned).ok_or_else(|| {
                DomainError::MalformedResponse("Invalid JSON from model".to_string())
            })?;
            serde_json::from_str(fragment).map_err(|_| {
                DomainError::MalformedResponse("Invalid JSON from model".to_string())
            })?
        }
    };

    let quote = non_empty_str(&parsed, "quote");
    let author = non_empty_str(&parsed, "author");

    match (quote, author) {
        (Some(quote), Some(author)) => Ok(GeneratedQuote { quote, author }),
        _ => Err(DomainError::MalformedResponse(
            "Malformed response from model".to_string(),
        )),
    }
}

fn strip_code_fences(text: &str) -> &str {
    let stripped = strip_prefix_ignore_ascii_case(text, "```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let stripped = stripped.strip_suffix("```").unwrap_or(stripped);
    stripped.trim()
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Greedy match from the first `{` to the last `}`. Two sibling JSON
/// fragments would select an unintended span; accepted approximation.
fn extract_braced(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn non_empty_str(value: &serde_json::Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeGenerator {
        reply: String,
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Ok(self.reply.clone())
        }

        fn provider_name(&self) -> &str {
            "fake"
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Err(DomainError::ExternalService("quota exceeded".to_string()))
        }

        fn provider_name(&self) -> &str {
            "fake"
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }

    fn service_replying(reply: &str) -> GenerationService {
        GenerationService::new(Some(Arc::new(FakeGenerator {
            reply: reply.to_string(),
        })))
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "resilience".to_string(),
            tone: "Stoic".to_string(),
            author_style: "Marcus Aurelius".to_string(),
        }
    }

    #[tokio::test]
    async fn test_strict_parse_path() {
        let result = service_replying(r#"{"quote":"Q","author":"A"}"#)
            .generate(&request())
            .await
            .unwrap();
        assert_eq!(result.quote, "Q");
        assert_eq!(result.author, "A");
    }

    #[tokio::test]
    async fn test_fenced_reply_is_stripped() {
        let result = service_replying("```json\n{\"quote\":\"Q\",\"author\":\"A\"}\n```")
            .generate(&request())
            .await
            .unwrap();
        assert_eq!(result, GeneratedQuote {
            quote: "Q".to_string(),
            author: "A".to_string(),
        });
    }

    #[tokio::test]
    async fn test_fence_tag_is_case_insensitive() {
        let result = service_replying("```JSON\n{\"quote\":\"Q\",\"author\":\"A\"}\n```")
            .generate(&request())
            .await
            .unwrap();
        assert_eq!(result.quote, "Q");
    }

    #[tokio::test]
    async fn test_prose_wrapped_reply_uses_fallback_extraction() {
        let result = service_replying(
            r#"Sure! Here you go: {"quote":"Q","author":"A"} Hope that helps!"#,
        )
        .generate(&request())
        .await
        .unwrap();
        assert_eq!(result.quote, "Q");
        assert_eq!(result.author, "A");
    }

    #[tokio::test]
    async fn test_reply_without_json_is_malformed() {
        let err = service_replying("Sure! No JSON here.")
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_author_is_malformed() {
        let err = service_replying(r#"{"quote":"Q"}"#)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_quote_is_malformed() {
        let err = service_replying(r#"{"quote":"","author":"A"}"#)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_string_quote_is_malformed() {
        let err = service_replying(r#"{"quote":42,"author":"A"}"#)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_extra_fields_are_discarded() {
        let result = service_replying(
            r#"{"quote":"Q","author":"A","mood":"wistful","tokens":12}"#,
        )
        .generate(&request())
        .await
        .unwrap();
        assert_eq!(result, GeneratedQuote {
            quote: "Q".to_string(),
            author: "A".to_string(),
        });
    }

    #[tokio::test]
    async fn test_missing_generator_is_configuration_error() {
        let err = GenerationService::new(None)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_credential_check() {
        let empty = GenerationRequest {
            topic: String::new(),
            tone: String::new(),
            author_style: String::new(),
        };
        let err = GenerationService::new(None).generate(&empty).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let service = GenerationService::new(Some(Arc::new(FailingGenerator)));
        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(msg) if msg.contains("quota")));
    }

    #[test]
    fn test_prompt_interpolates_all_three_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("the topic of \"resilience\""));
        assert!(prompt.contains("a Stoic tone"));
        assert!(prompt.contains("in the style of \"Marcus Aurelius\""));
        assert!(prompt.contains("a short, original, and impactful quote"));
        assert!(prompt.contains("no code fences or commentary"));
    }

    #[test]
    fn test_greedy_extraction_spans_first_to_last_brace() {
        // Sibling fragments select one unintended span; kept as-is.
        let text = r#"{"quote":"Q1","author":"A1"} and {"quote":"Q2","author":"A2"}"#;
        let fragment = extract_braced(text).unwrap();
        assert!(fragment.starts_with(r#"{"quote":"Q1""#));
        assert!(fragment.ends_with(r#""A2"}"#));
    }
}
