//! Recommendation routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitlife_shared::models::DietType;
use fitlife_shared::types::{
    CompletePlanResponse, DietPlanResponse, DietQuery, ExercisePlanResponse,
};

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/exercise", get(get_exercise_recommendations))
        .route("/diet", get(get_diet_recommendations))
        .route("/complete", get(get_complete_recommendations))
}

fn parse_diet_type(query: &DietQuery) -> Result<DietType, ApiError> {
    match query.diet_type.as_deref() {
        None => Ok(DietType::default()),
        Some(raw) => raw.parse().map_err(|_| {
            ApiError::Validation("Invalid diet type. Use \"veg\" or \"nonveg\".".to_string())
        }),
    }
}

/// GET /api/recommendations/exercise
async fn get_exercise_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ExercisePlanResponse>> {
    let response = RecommendationService::exercise(&state.db, auth.user_id).await?;
    Ok(Json(response))
}

/// GET /api/recommendations/diet?dietType=veg|nonveg
async fn get_diet_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DietQuery>,
) -> ApiResult<Json<DietPlanResponse>> {
    let diet_type = parse_diet_type(&query)?;
    let response = RecommendationService::diet(&state.db, auth.user_id, diet_type).await?;
    Ok(Json(response))
}

/// GET /api/recommendations/complete?dietType=veg|nonveg
async fn get_complete_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DietQuery>,
) -> ApiResult<Json<CompletePlanResponse>> {
    let diet_type = parse_diet_type(&query)?;
    let response = RecommendationService::complete(&state.db, auth.user_id, diet_type).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_diet_type_defaults_to_veg() {
        let query = DietQuery { diet_type: None };
        assert_eq!(parse_diet_type(&query).unwrap(), DietType::Veg);
    }

    #[test]
    fn test_parse_diet_type_rejects_unknown() {
        let query = DietQuery {
            diet_type: Some("keto".to_string()),
        };
        assert!(parse_diet_type(&query).is_err());
    }

    #[test]
    fn test_parse_diet_type_nonveg() {
        let query = DietQuery {
            diet_type: Some("nonveg".to_string()),
        };
        assert_eq!(parse_diet_type(&query).unwrap(), DietType::NonVeg);
    }
}
