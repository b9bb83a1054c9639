//! Challenge routes
//!
//! Handlers construct the random source for challenge generation; the
//! services take any `Rng`, so tests can pin a seeded one.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ChallengeService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use fitlife_shared::models::ChallengeType;
use fitlife_shared::types::{ChallengeHistoryQuery, ChallengeHistoryResponse, ChallengeResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

const DEFAULT_HISTORY_DAYS: i64 = 30;

/// Create challenge routes
pub fn challenge_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", get(get_daily_challenge))
        .route("/weekly", get(get_weekly_challenge))
        .route("/complete/:id", put(complete_challenge))
        .route("/history", get(get_challenge_history))
}

/// GET /api/challenges/daily
async fn get_daily_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ChallengeResponse>> {
    let mut rng = StdRng::from_entropy();
    let challenge =
        ChallengeService::get_or_create(&state.db, auth.user_id, ChallengeType::Daily, &mut rng)
            .await?;

    Ok(Json(ChallengeResponse {
        success: true,
        message: None,
        challenge,
    }))
}

/// GET /api/challenges/weekly
async fn get_weekly_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ChallengeResponse>> {
    let mut rng = StdRng::from_entropy();
    let challenge =
        ChallengeService::get_or_create(&state.db, auth.user_id, ChallengeType::Weekly, &mut rng)
            .await?;

    Ok(Json(ChallengeResponse {
        success: true,
        message: None,
        challenge,
    }))
}

/// PUT /api/challenges/complete/:id
async fn complete_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ChallengeResponse>> {
    let challenge = ChallengeService::complete(&state.db, auth.user_id, id).await?;

    Ok(Json(ChallengeResponse {
        success: true,
        message: Some("Challenge completed successfully!".to_string()),
        challenge,
    }))
}

/// GET /api/challenges/history?days=30&type=Daily
async fn get_challenge_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ChallengeHistoryQuery>,
) -> ApiResult<Json<ChallengeHistoryResponse>> {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    let (challenges, stats) =
        ChallengeService::history(&state.db, auth.user_id, days, query.challenge_type).await?;

    Ok(Json(ChallengeHistoryResponse {
        success: true,
        challenges,
        stats,
    }))
}
