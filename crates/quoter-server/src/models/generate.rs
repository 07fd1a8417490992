//! Quote Generation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use quoter::{GeneratedQuote, GenerationRequest};

/// Generate quote request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateQuoteRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default, rename = "authorStyle")]
    pub author_style: String,
}

impl From<GenerateQuoteRequest> for GenerationRequest {
    fn from(req: GenerateQuoteRequest) -> Self {
        Self {
            topic: req.topic,
            tone: req.tone,
            author_style: req.author_style,
        }
    }
}

/// Generate quote response: exactly two fields
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateQuoteResponse {
    pub quote: String,
    pub author: String,
}

impl From<GeneratedQuote> for GenerateQuoteResponse {
    fn from(generated: GeneratedQuote) -> Self {
        Self {
            quote: generated.quote,
            author: generated.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_style_is_camel_case_on_the_wire() {
        let req: GenerateQuoteRequest = serde_json::from_str(
            r#"{"topic":"focus","tone":"Playful","authorStyle":"Mark Twain"}"#,
        )
        .unwrap();
        assert_eq!(req.author_style, "Mark Twain");
    }

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        // Missing fields become empty strings and fail validation
        // downstream instead of rejecting the body outright.
        let req: GenerateQuoteRequest = serde_json::from_str(r#"{"topic":"focus"}"#).unwrap();
        assert!(req.tone.is_empty());
        assert!(req.author_style.is_empty());
    }
}
