//! Quoter Domain Library
//!
//! Core domain types and interfaces for the Quoter quote-generation app.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Quote, Profile, UserIdentity)
//!   - `value_objects/`: Immutable value types (GenerationRequest, GeneratedQuote)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use quoter::domain::{Quote, Profile, GenerationRequest};
//! use quoter::ports::{QuoteRepository, TextGenerator};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, GeneratedQuote, GenerationRequest, Profile, Quote, Session, UserIdentity,
};
pub use ports::{
    ProfileRepository, QuoteRepository, SessionRepository, TextGenerator,
};
