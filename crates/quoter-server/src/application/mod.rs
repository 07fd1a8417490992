//! Application Services (Use Cases)
//!
//! Orchestrate domain operations over the ports; no HTTP or SQL here.

pub mod generation_service;
pub mod profile_service;
pub mod quote_service;

pub use generation_service::GenerationService;
pub use profile_service::ProfileService;
pub use quote_service::QuoteService;
