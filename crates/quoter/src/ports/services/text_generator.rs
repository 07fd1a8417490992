//! Text Generator Port
//!
//! Abstract interface for the external text-generation provider. The
//! provider is treated as opaque and unreliable in formatting: callers
//! get the raw reply text back and coerce it themselves.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Text generation interface
///
/// This trait abstracts the provider so the generation pipeline can be
/// exercised with a deterministic fake in tests.
///
/// # Example
///
/// ```rust,ignore
/// use quoter::ports::TextGenerator;
///
/// struct GeminiTextGenerator { /* ... */ }
///
/// #[async_trait]
/// impl TextGenerator for GeminiTextGenerator {
///     async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
///         // Call the Gemini REST API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt. Exactly one provider call; failures
    /// of the call itself surface as `DomainError::ExternalService`.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
