//! Generate Routes - Quote Generation

use axum::{extract::State, routing::post, Json, Router};

use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{GenerateQuoteRequest, GenerateQuoteResponse};
use crate::AppState;

/// Generate a quote from topic, tone and author style
#[utoipa::path(
    post,
    path = "/api/generate-quote",
    request_body = GenerateQuoteRequest,
    responses(
        (status = 200, description = "Quote generated", body = GenerateQuoteResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Provider or configuration failure", body = ErrorResponse)
    ),
    tag = "Generate"
)]
pub async fn generate_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<GenerateQuoteRequest>,
) -> Result<Json<GenerateQuoteResponse>, ApiError> {
    let request = payload.into();
    let generated = state.generation_service.generate(&request).await?;

    tracing::info!("Generated quote for user {}", user.user_id);

    Ok(Json(generated.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate-quote", post(generate_quote))
}
