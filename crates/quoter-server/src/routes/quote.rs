//! Quote Routes - Saved Quote Management

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use quoter::GeneratedQuote;

use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{PublishQuoteRequest, QuoteResponse, SaveQuoteRequest};
use crate::AppState;

/// List the caller's saved quotes
#[utoipa::path(
    get,
    path = "/api/quotes",
    responses(
        (status = 200, description = "Saved quotes, newest first", body = Vec<QuoteResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.quote_service.history(&user).await?;
    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}

/// Save a quote for the caller
#[utoipa::path(
    post,
    path = "/api/quotes",
    request_body = SaveQuoteRequest,
    responses(
        (status = 200, description = "Quote saved", body = QuoteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn save_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<SaveQuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let generated = GeneratedQuote {
        quote: payload.quote_text,
        author: payload.author,
    };
    let saved = state
        .quote_service
        .save(&user, generated, payload.topic)
        .await?;

    Ok(Json(saved.into()))
}

/// Publish or unpublish one of the caller's quotes
#[utoipa::path(
    put,
    path = "/api/quotes/{id}/publish",
    params(("id" = Uuid, Path, description = "Quote ID")),
    request_body = PublishQuoteRequest,
    responses(
        (status = 200, description = "Publish flag updated", body = QuoteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn publish_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PublishQuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let updated = state
        .quote_service
        .set_published(&user, id, payload.published)
        .await?;

    Ok(Json(updated.into()))
}

/// Remove one of the caller's saved quotes
#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    params(("id" = Uuid, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "Quote removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.quote_service.remove(&user, id).await?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Quote removed"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quotes", get(list_quotes).post(save_quote))
        .route("/api/quotes/:id", axum::routing::delete(delete_quote))
        .route("/api/quotes/:id/publish", put(publish_quote))
}
