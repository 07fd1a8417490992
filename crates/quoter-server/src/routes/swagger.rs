//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    GenerateQuoteRequest,
    GenerateQuoteResponse,
    ProfileResponse,
    PublishQuoteRequest,
    QuoteResponse,
    SaveQuoteRequest,
    UpdateProfileRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Generate endpoints
        super::generate::generate_quote,
        // Quote endpoints
        super::quote::list_quotes,
        super::quote::save_quote,
        super::quote::publish_quote,
        super::quote::delete_quote,
        // Feed endpoints
        super::feed::get_feed,
        // Profile endpoints
        super::profile::get_profile,
        super::profile::update_profile,
    ),
    info(
        title = "Quoter API",
        version = "0.1.0",
        description = "AI quote generation with saved quotes, a shared feed and profiles.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generate", description = "Quote generation via the text-generation provider"),
        (name = "Quotes", description = "Saved quotes with publish/unpublish"),
        (name = "Feed", description = "Published quotes from everyone"),
        (name = "Profile", description = "Profile settings"),
    ),
    components(
        schemas(
            // Generate
            GenerateQuoteRequest,
            GenerateQuoteResponse,
            // Quotes
            QuoteResponse,
            SaveQuoteRequest,
            PublishQuoteRequest,
            // Profile
            ProfileResponse,
            UpdateProfileRequest,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
