//! Generation Request and Result
//!
//! Ephemeral values that exist for the duration of one generate call.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Input to one quote generation: all three fields are required, free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: String,
    pub author_style: String,
}

impl GenerationRequest {
    /// Require all three fields to be non-empty after trimming.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if self.topic.trim().is_empty() {
            missing.push("topic");
        }
        if self.tone.trim().is_empty() {
            missing.push("tone");
        }
        if self.author_style.trim().is_empty() {
            missing.push("authorStyle");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "Missing fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// A generated quote as returned to the caller: exactly two fields,
/// anything else the provider produced has already been discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuote {
    pub quote: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, tone: &str, author_style: &str) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            tone: tone.to_string(),
            author_style: author_style.to_string(),
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(request("resilience", "Stoic", "Marcus Aurelius")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_empty_topic_is_rejected() {
        let err = request("", "Stoic", "Marcus Aurelius")
            .validate()
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("topic")));
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let err = request("focus", "  ", "Mark Twain").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("tone")));
    }

    #[test]
    fn test_all_missing_fields_are_named() {
        let err = request("", "", "").validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("topic"));
                assert!(msg.contains("tone"));
                assert!(msg.contains("authorStyle"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
