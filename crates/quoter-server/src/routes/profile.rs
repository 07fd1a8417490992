//! Profile Routes - Profile Settings

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{ProfileResponse, UpdateProfileRequest};
use crate::AppState;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile (empty defaults when never saved)", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state.profile_service.get(&user).await?;
    Ok(Json(profile.into()))
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .update(&user, payload.full_name, payload.bio, payload.avatar_url)
        .await?;

    Ok(Json(profile.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/profile", get(get_profile).put(update_profile))
}
