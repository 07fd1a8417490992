//! Quoter API Models
//!
//! Request/response DTOs for the HTTP layer. Wire shapes follow the
//! original web client: `authorStyle` is camelCase on the generate call,
//! stored records travel as their snake_case column names.

pub mod generate;
pub mod profile;
pub mod quote;

pub use generate::{GenerateQuoteRequest, GenerateQuoteResponse};
pub use profile::{ProfileResponse, UpdateProfileRequest};
pub use quote::{PublishQuoteRequest, QuoteResponse, SaveQuoteRequest};
