//! API request/response types shared between backend and clients
//!
//! Wire format is camelCase JSON. Success envelopes carry
//! `"success": true`; failures are `{"message": "..."}` (see the backend
//! error type).

use crate::models::{
    ActivityLevel, ChallengeType, FitnessGoal, Gender, Workout,
};
use crate::recommendations::{MealPlan, WorkoutRecommendation};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Health profile
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub age: i32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goals: FitnessGoal,
    #[serde(default)]
    pub health_conditions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goals: Option<FitnessGoal>,
    pub health_conditions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub id: Uuid,
    pub age: i32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goals: FitnessGoal,
    pub health_conditions: Vec<String>,
    pub bmi: f64,
    pub bmi_category: String,
    pub recommended_calories: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: ProfileBody,
}

/// Derived-field snapshot returned after a weight-log cascade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub weight: f64,
    pub bmi: f64,
    pub bmi_category: String,
    pub recommended_calories: i32,
}

// ============================================================================
// Daily logs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

/// Workout payload; the type arrives as a string so an unknown value is a
/// 400 with the valid options listed, not a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutRequest {
    pub name: String,
    pub duration: i32,
    #[serde(rename = "type")]
    pub workout_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightRequest {
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogBody {
    pub date: NaiveDate,
    pub water_intake: f64,
    pub calories: f64,
    pub workouts: Vec<Workout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub log: DailyLogBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLogResponse {
    pub success: bool,
    pub message: String,
    pub log: DailyLogBody,
    pub updated_profile: Option<ProfileSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeResponse {
    pub success: bool,
    pub count: usize,
    pub logs: Vec<DailyLogBody>,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrendData {
    pub dates: Vec<NaiveDate>,
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrendStats {
    pub data_points: usize,
    pub start_weight: Option<f64>,
    pub current_weight: Option<f64>,
    pub weight_change: f64,
    pub average_weight: f64,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrendResponse {
    pub success: bool,
    pub data: WeightTrendData,
    pub stats: WeightTrendStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterTrendData {
    pub dates: Vec<NaiveDate>,
    pub water_intakes: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterTrendStats {
    pub data_points: usize,
    pub average_daily: i64,
    pub total_intake: f64,
    /// Fixed client-side comparison goal, in ml
    pub goal: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterTrendResponse {
    pub success: bool,
    pub data: WaterTrendData,
    pub stats: WaterTrendStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTrendData {
    pub dates: Vec<NaiveDate>,
    pub calories: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTrendStats {
    pub data_points: usize,
    pub average_daily: i64,
    pub total_intake: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTrendResponse {
    pub success: bool,
    pub data: CalorieTrendData,
    pub stats: CalorieTrendStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummaryData {
    pub dates: Vec<NaiveDate>,
    pub daily_minutes: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub count: usize,
    pub minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummaryStats {
    pub total_workouts: usize,
    pub total_minutes: i64,
    pub workout_days: usize,
    pub average_per_day: i64,
    pub workouts_by_type: BTreeMap<String, TypeBreakdown>,
    pub consistency: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummaryResponse {
    pub success: bool,
    pub data: WorkoutSummaryData,
    pub summary: WorkoutSummaryStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub total_days: i64,
    pub logged_days: usize,
    pub average_calories: i64,
    pub average_water: i64,
    pub total_workouts: usize,
    pub workout_days: usize,
    pub current_streak: usize,
    pub longest_streak: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardChartData {
    pub dates: Vec<NaiveDate>,
    pub calories: Vec<f64>,
    pub water: Vec<f64>,
    pub workouts: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub analytics: DashboardAnalytics,
    pub chart_data: DashboardChartData,
}

// ============================================================================
// Challenges
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeBody {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub date_assigned: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub challenge: ChallengeBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeHistoryQuery {
    pub days: Option<i64>,
    #[serde(rename = "type")]
    pub challenge_type: Option<ChallengeType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_rate: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeHistoryResponse {
    pub success: bool,
    pub challenges: Vec<ChallengeBody>,
    pub stats: ChallengeStats,
}

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietQuery {
    pub diet_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProfileSnippet {
    pub bmi_category: String,
    pub goals: FitnessGoal,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecommendationNotes {
    pub total_workouts: usize,
    pub weekly_minutes: i64,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlanResponse {
    pub success: bool,
    pub message: String,
    pub profile: ExerciseProfileSnippet,
    pub exercise_plan: Vec<WorkoutRecommendation>,
    pub recommendations: ExerciseRecommendationNotes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietProfileSnippet {
    pub bmi_category: String,
    pub goals: FitnessGoal,
    pub recommended_calories: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTiming {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRecommendationNotes {
    pub daily_calories: i32,
    pub water_intake: String,
    pub meal_timing: MealTiming,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResponse {
    pub success: bool,
    pub message: String,
    pub profile: DietProfileSnippet,
    pub diet_type: String,
    pub diet_plan: MealPlan,
    pub recommendations: DietRecommendationNotes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileSnippet {
    pub age: i32,
    pub bmi: f64,
    pub bmi_category: String,
    pub goals: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub recommended_calories: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteExercisePlan {
    pub workouts: Vec<WorkoutRecommendation>,
    pub weekly_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteDietPlan {
    #[serde(rename = "type")]
    pub diet_type: String,
    pub meals: MealPlan,
    pub daily_calories: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePlanResponse {
    pub success: bool,
    pub message: String,
    pub profile: CompleteProfileSnippet,
    pub exercise_plan: CompleteExercisePlan,
    pub diet_plan: CompleteDietPlan,
    pub general_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_request_camel_case() {
        let json = r#"{
            "age": 30,
            "gender": "Male",
            "height": 180,
            "weight": 75,
            "activityLevel": "Moderate",
            "goals": "Weight Loss"
        }"#;
        let req: CreateProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.activity_level, ActivityLevel::Moderate);
        assert_eq!(req.goals, FitnessGoal::WeightLoss);
        assert!(req.health_conditions.is_none());
    }

    #[test]
    fn test_daily_log_body_serializes_camel_case() {
        let body = DailyLogBody {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            water_intake: 750.0,
            calories: 1200.0,
            workouts: vec![],
            weight: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["waterIntake"], 750.0);
        assert_eq!(json["date"], "2024-03-01");
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn test_challenge_history_query_type_alias() {
        let query: ChallengeHistoryQuery =
            serde_json::from_str(r#"{"days": 7, "type": "Daily"}"#).unwrap();
        assert_eq!(query.challenge_type, Some(ChallengeType::Daily));
    }

    #[test]
    fn test_challenge_body_wire_fields() {
        let body = ChallengeBody {
            id: Uuid::nil(),
            challenge_type: ChallengeType::Weekly,
            title: "t".into(),
            description: "d".into(),
            is_completed: false,
            date_assigned: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "Weekly");
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["dateAssigned"], "2024-03-04");
    }
}
