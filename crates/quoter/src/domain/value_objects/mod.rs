//! Value Objects
//!
//! Immutable value types without identity.

pub mod generation;

pub use generation::{GeneratedQuote, GenerationRequest};
