//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;
pub mod postgres;

// Re-exports
pub use gemini::GeminiTextGenerator;
pub use postgres::{PgProfileRepository, PgQuoteRepository, PgSessionRepository};
