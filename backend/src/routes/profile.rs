//! Health profile routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitlife_shared::types::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(get_profile).post(create_profile).put(update_profile),
    )
}

/// GET /api/health/profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::get(&state.db, auth.user_id).await?;

    Ok(Json(ProfileResponse {
        success: true,
        profile: profile.into_body(),
    }))
}

/// POST /api/health/profile
async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResult<(StatusCode, Json<ProfileResponse>)> {
    let profile = ProfileService::create(&state.db, auth.user_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            success: true,
            profile: profile.into_body(),
        }),
    ))
}

/// PUT /api/health/profile
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::update(&state.db, auth.user_id, req).await?;

    Ok(Json(ProfileResponse {
        success: true,
        profile: profile.into_body(),
    }))
}
