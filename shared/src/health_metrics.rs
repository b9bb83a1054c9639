//! Health metrics calculations
//!
//! Pure functions for BMI, BMI classification, and recommended daily
//! calories. Everything here is deterministic and side-effect free so the
//! same rounding is applied wherever a metric is produced.

use crate::models::{ActivityLevel, BmiCategory, FitnessGoal};

/// Round to one decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate BMI from height and weight
///
/// Formula: weight(kg) / height(m)², rounded to 1 decimal place.
pub fn calc_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

/// Classify a BMI value
///
/// Lower bounds are inclusive: [0, 18.5) Underweight, [18.5, 25) Normal,
/// [25, 30) Overweight, [30, ∞) Obese.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Recommended daily calories from activity level and goal
///
/// Base calories by activity level (Low 1800, Moderate 2200, High 2600),
/// scaled for the goal: Weight Loss ×0.875, Muscle Gain ×1.15, Maintain
/// unchanged.
pub fn recommended_calories(activity: ActivityLevel, goal: FitnessGoal) -> i32 {
    let base: f64 = match activity {
        ActivityLevel::Low => 1800.0,
        ActivityLevel::Moderate => 2200.0,
        ActivityLevel::High => 2600.0,
    };

    let scaled = match goal {
        FitnessGoal::WeightLoss => base * 0.875,
        FitnessGoal::MuscleGain => base * 1.15,
        FitnessGoal::Maintain => base,
    };

    scaled.round() as i32
}
