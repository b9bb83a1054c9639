//! Recommendation service
//!
//! Wraps the pure plan generators with profile lookup and the advisory
//! metadata (weekly minutes, tips, meal timing) the client renders.

use crate::error::ApiError;
use crate::services::profile::ProfileService;
use fitlife_shared::models::{DietType, FitnessGoal};
use fitlife_shared::recommendations::{diet_plan, exercise_plan, WorkoutRecommendation};
use fitlife_shared::types::{
    CompleteDietPlan, CompleteExercisePlan, CompletePlanResponse, CompleteProfileSnippet,
    DietPlanResponse, DietProfileSnippet, DietRecommendationNotes, ExercisePlanResponse,
    ExerciseProfileSnippet, ExerciseRecommendationNotes, MealTiming,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Personalized exercise plan
    pub async fn exercise(pool: &PgPool, user_id: Uuid) -> Result<ExercisePlanResponse, ApiError> {
        let profile = Self::require_profile(pool, user_id).await?;

        let plan = exercise_plan(profile.bmi_category, profile.goal, profile.activity_level);
        let weekly_minutes = total_minutes(&plan);

        Ok(ExercisePlanResponse {
            success: true,
            message: "Personalized exercise plan generated".to_string(),
            profile: ExerciseProfileSnippet {
                bmi_category: profile.bmi_category.to_string(),
                goals: profile.goal,
                activity_level: profile.activity_level,
            },
            recommendations: ExerciseRecommendationNotes {
                total_workouts: plan.len(),
                weekly_minutes,
                tip: exercise_tip(profile.goal).to_string(),
            },
            exercise_plan: plan,
        })
    }

    /// Personalized diet plan
    pub async fn diet(
        pool: &PgPool,
        user_id: Uuid,
        diet_type: DietType,
    ) -> Result<DietPlanResponse, ApiError> {
        let profile = Self::require_profile(pool, user_id).await?;

        let plan = diet_plan(profile.bmi_category, profile.goal, diet_type);

        Ok(DietPlanResponse {
            success: true,
            message: "Personalized diet plan generated".to_string(),
            profile: DietProfileSnippet {
                bmi_category: profile.bmi_category.to_string(),
                goals: profile.goal,
                recommended_calories: profile.recommended_calories,
            },
            diet_type: diet_type.to_string(),
            diet_plan: plan,
            recommendations: DietRecommendationNotes {
                daily_calories: profile.recommended_calories,
                water_intake: "2.5-3 liters per day".to_string(),
                meal_timing: meal_timing(),
                tip: diet_tip(profile.goal).to_string(),
            },
        })
    }

    /// Combined exercise and diet plan
    pub async fn complete(
        pool: &PgPool,
        user_id: Uuid,
        diet_type: DietType,
    ) -> Result<CompletePlanResponse, ApiError> {
        let profile = Self::require_profile(pool, user_id).await?;

        let workouts = exercise_plan(profile.bmi_category, profile.goal, profile.activity_level);
        let weekly_minutes = total_minutes(&workouts);
        let meals = diet_plan(profile.bmi_category, profile.goal, diet_type);

        Ok(CompletePlanResponse {
            success: true,
            message: "Complete personalized health plan generated".to_string(),
            profile: CompleteProfileSnippet {
                age: profile.age,
                bmi: profile.bmi,
                bmi_category: profile.bmi_category.to_string(),
                goals: profile.goal,
                activity_level: profile.activity_level,
                recommended_calories: profile.recommended_calories,
            },
            exercise_plan: CompleteExercisePlan {
                workouts,
                weekly_minutes,
            },
            diet_plan: CompleteDietPlan {
                diet_type: diet_type.to_string(),
                meals,
                daily_calories: profile.recommended_calories,
            },
            general_tips: general_tips(),
        })
    }

    async fn require_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<crate::services::ProfileView, ApiError> {
        ProfileService::find(pool, user_id).await?.ok_or_else(|| {
            ApiError::NotFound(
                "Health profile not found. Please create your profile first.".to_string(),
            )
        })
    }
}

fn total_minutes(plan: &[WorkoutRecommendation]) -> i64 {
    plan.iter().map(|w| w.duration as i64).sum()
}

fn exercise_tip(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::WeightLoss => {
            "Focus on consistency and gradually increase intensity for best results."
        }
        FitnessGoal::MuscleGain => {
            "Ensure proper nutrition and rest between strength training sessions."
        }
        FitnessGoal::Maintain => "Maintain a balanced routine to stay healthy and fit.",
    }
}

fn diet_tip(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::WeightLoss => {
            "Focus on portion control and avoid processed foods. Stay hydrated!"
        }
        FitnessGoal::MuscleGain => {
            "Eat protein-rich meals and maintain a calorie surplus. Don't skip meals!"
        }
        FitnessGoal::Maintain => "Eat balanced meals with variety. Listen to your body's hunger cues.",
    }
}

fn meal_timing() -> MealTiming {
    MealTiming {
        breakfast: "7:00 AM - 9:00 AM".to_string(),
        lunch: "12:00 PM - 2:00 PM".to_string(),
        dinner: "6:00 PM - 8:00 PM".to_string(),
        snacks: "Between meals as needed".to_string(),
    }
}

fn general_tips() -> Vec<String> {
    [
        "Stay consistent with your routine",
        "Get 7-8 hours of quality sleep",
        "Stay hydrated throughout the day",
        "Track your progress regularly",
        "Listen to your body and adjust as needed",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
