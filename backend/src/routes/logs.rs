//! Daily log routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::DailyLogService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use fitlife_shared::types::{
    AmountRequest, LogResponse, RangeQuery, RangeResponse, WeightLogResponse, WeightRequest,
    WorkoutRequest,
};

/// Create daily log routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/water", post(add_water))
        .route("/calories", post(add_calories))
        .route("/workout", post(add_workout))
        .route("/weight", post(add_weight))
        .route("/today", get(get_today_log))
        .route("/range", get(get_logs_by_range))
}

/// POST /api/logs/water
async fn add_water(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AmountRequest>,
) -> ApiResult<Json<LogResponse>> {
    let log = DailyLogService::add_water(&state.db, auth.user_id, req.amount).await?;

    Ok(Json(LogResponse {
        success: true,
        message: Some("Water intake logged successfully".to_string()),
        log,
    }))
}

/// POST /api/logs/calories
async fn add_calories(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AmountRequest>,
) -> ApiResult<Json<LogResponse>> {
    let log = DailyLogService::add_calories(&state.db, auth.user_id, req.amount).await?;

    Ok(Json(LogResponse {
        success: true,
        message: Some("Calories logged successfully".to_string()),
        log,
    }))
}

/// POST /api/logs/workout
async fn add_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<WorkoutRequest>,
) -> ApiResult<Json<LogResponse>> {
    let log = DailyLogService::add_workout(&state.db, auth.user_id, req).await?;

    Ok(Json(LogResponse {
        success: true,
        message: Some("Workout logged successfully".to_string()),
        log,
    }))
}

/// POST /api/logs/weight
async fn add_weight(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<WeightRequest>,
) -> ApiResult<Json<WeightLogResponse>> {
    let (log, updated_profile) =
        DailyLogService::add_weight(&state.db, auth.user_id, req.weight).await?;

    Ok(Json(WeightLogResponse {
        success: true,
        message: "Weight logged successfully".to_string(),
        log,
        updated_profile,
    }))
}

/// GET /api/logs/today
async fn get_today_log(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<LogResponse>> {
    let log = DailyLogService::today_log(&state.db, auth.user_id).await?;

    Ok(Json(LogResponse {
        success: true,
        message: None,
        log,
    }))
}

/// GET /api/logs/range?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
async fn get_logs_by_range(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<RangeResponse>> {
    let (start, end) = match (query.start_date, query.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(ApiError::Validation(
                "Please provide startDate and endDate".to_string(),
            ))
        }
    };

    let logs = DailyLogService::logs_in_range(&state.db, auth.user_id, start, end).await?;

    Ok(Json(RangeResponse {
        success: true,
        count: logs.len(),
        logs,
    }))
}
