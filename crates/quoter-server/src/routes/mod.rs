//! Quoter API Routes
//!
//! - /api/generate-quote - quote generation
//! - /api/quotes - saved quotes
//! - /api/feed - published quotes from everyone
//! - /api/profile - profile settings

pub mod feed;
pub mod generate;
pub mod profile;
pub mod quote;
pub mod swagger;
