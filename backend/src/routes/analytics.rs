//! Analytics routes
//!
//! Every endpoint accepts `?days=N` (default 30) and aggregates the
//! caller's logs over [today − N + 1, today].

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AnalyticsService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitlife_shared::types::{
    CalorieTrendResponse, DashboardResponse, DaysQuery, WaterTrendResponse, WeightTrendResponse,
    WorkoutSummaryResponse,
};

const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Create analytics routes
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/weight-trend", get(weight_trend))
        .route("/water-trend", get(water_trend))
        .route("/calorie-trend", get(calorie_trend))
        .route("/workout-summary", get(workout_summary))
        .route("/dashboard", get(dashboard))
}

fn window_days(query: &DaysQuery) -> i64 {
    query.days.unwrap_or(DEFAULT_WINDOW_DAYS)
}

/// GET /api/analytics/weight-trend?days=30
async fn weight_trend(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Json<WeightTrendResponse>> {
    let response =
        AnalyticsService::weight_trend(&state.db, auth.user_id, window_days(&query)).await?;
    Ok(Json(response))
}

/// GET /api/analytics/water-trend?days=30
async fn water_trend(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Json<WaterTrendResponse>> {
    let response =
        AnalyticsService::water_trend(&state.db, auth.user_id, window_days(&query)).await?;
    Ok(Json(response))
}

/// GET /api/analytics/calorie-trend?days=30
async fn calorie_trend(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Json<CalorieTrendResponse>> {
    let response =
        AnalyticsService::calorie_trend(&state.db, auth.user_id, window_days(&query)).await?;
    Ok(Json(response))
}

/// GET /api/analytics/workout-summary?days=30
async fn workout_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Json<WorkoutSummaryResponse>> {
    let response =
        AnalyticsService::workout_summary(&state.db, auth.user_id, window_days(&query)).await?;
    Ok(Json(response))
}

/// GET /api/analytics/dashboard?days=30
async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let response =
        AnalyticsService::dashboard(&state.db, auth.user_id, window_days(&query)).await?;
    Ok(Json(response))
}
