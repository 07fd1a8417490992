//! Feed Routes - Published Quotes from Everyone

use axum::{extract::State, routing::get, Json, Router};

use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::QuoteResponse;
use crate::AppState;

/// Published quotes from all users, newest first
#[utoipa::path(
    get,
    path = "/api/feed",
    responses(
        (status = 200, description = "Published quotes", body = Vec<QuoteResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn get_feed(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.quote_service.feed().await?;
    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/feed", get(get_feed))
}
