//! Rule-based exercise and diet plan generation
//!
//! Deterministic mappings from a user's BMI category, goal, activity level,
//! and diet preference to a personalized plan. Base plans are keyed by
//! exhaustive matches so an unhandled category/goal combination cannot
//! compile.

use crate::models::{ActivityLevel, BmiCategory, DietType, FitnessGoal, WorkoutType};
use serde::{Deserialize, Serialize};

/// A recommended workout in an exercise plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration: i32,
    pub description: String,
}

impl WorkoutRecommendation {
    fn new(workout_type: WorkoutType, duration: i32, description: &str) -> Self {
        Self {
            workout_type,
            duration,
            description: description.to_string(),
        }
    }
}

/// A day's meal plan, each slot holding alternative options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snacks: Vec<String>,
}

impl MealPlan {
    fn new(breakfast: &[&str], lunch: &[&str], dinner: &[&str], snacks: &[&str]) -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            breakfast: to_vec(breakfast),
            lunch: to_vec(lunch),
            dinner: to_vec(dinner),
            snacks: to_vec(snacks),
        }
    }
}

/// Base exercise plan for a BMI category
fn base_exercise_plan(category: BmiCategory) -> Vec<WorkoutRecommendation> {
    use WorkoutType::*;
    match category {
        // Focus on strength and yoga
        BmiCategory::Underweight => vec![
            WorkoutRecommendation::new(
                Strength,
                45,
                "Full body strength training with compound movements (squats, deadlifts, bench press)",
            ),
            WorkoutRecommendation::new(Yoga, 30, "Gentle yoga for flexibility and mind-body connection"),
            WorkoutRecommendation::new(Strength, 40, "Upper body focused - pull-ups, rows, shoulder press"),
        ],
        // Balanced routine
        BmiCategory::Normal => vec![
            WorkoutRecommendation::new(Cardio, 30, "Moderate intensity cardio - jogging, cycling, or swimming"),
            WorkoutRecommendation::new(Strength, 40, "Full body resistance training with weights"),
            WorkoutRecommendation::new(Flexibility, 25, "Stretching and mobility work to prevent injuries"),
        ],
        // More cardio and HIIT
        BmiCategory::Overweight => vec![
            WorkoutRecommendation::new(Cardio, 40, "Steady-state cardio - brisk walking, elliptical, or cycling"),
            WorkoutRecommendation::new(
                Hiit,
                25,
                "High-intensity interval training - burpees, jump squats, mountain climbers",
            ),
            WorkoutRecommendation::new(Strength, 30, "Circuit training with bodyweight and light weights"),
        ],
        // Low-impact cardio and gradual strength
        BmiCategory::Obese => vec![
            WorkoutRecommendation::new(Cardio, 30, "Low-impact cardio - walking, water aerobics, or stationary bike"),
            WorkoutRecommendation::new(Strength, 20, "Gentle strength training focusing on major muscle groups"),
            WorkoutRecommendation::new(Flexibility, 20, "Gentle stretching and chair yoga for mobility"),
        ],
    }
}

/// Generate a personalized exercise plan
///
/// Base plan by BMI category, one goal-driven extra workout, then duration
/// scaling and a level tag for Low/High activity. Moderate activity leaves
/// the plan untouched.
pub fn exercise_plan(
    category: BmiCategory,
    goal: FitnessGoal,
    activity: ActivityLevel,
) -> Vec<WorkoutRecommendation> {
    let mut workouts = base_exercise_plan(category);

    match goal {
        FitnessGoal::WeightLoss => workouts.push(WorkoutRecommendation::new(
            WorkoutType::Hiit,
            20,
            "Fat-burning HIIT session - sprint intervals or tabata training",
        )),
        FitnessGoal::MuscleGain => workouts.push(WorkoutRecommendation::new(
            WorkoutType::Strength,
            50,
            "Progressive overload strength training - focus on hypertrophy (8-12 reps)",
        )),
        FitnessGoal::Maintain => {}
    }

    match activity {
        ActivityLevel::Low => scale_plan(&mut workouts, 0.7, "Beginner level: "),
        ActivityLevel::High => scale_plan(&mut workouts, 1.2, "Advanced level: "),
        ActivityLevel::Moderate => {}
    }

    workouts
}

fn scale_plan(workouts: &mut [WorkoutRecommendation], factor: f64, prefix: &str) {
    for workout in workouts {
        workout.duration = (workout.duration as f64 * factor).round() as i32;
        workout.description = format!("{}{}", prefix, workout.description);
    }
}

/// Base vegetarian plan by goal
fn veg_plan(goal: FitnessGoal) -> MealPlan {
    match goal {
        FitnessGoal::WeightLoss => MealPlan::new(
            &[
                "Oatmeal with berries and chia seeds",
                "Green smoothie with spinach, banana, and protein powder",
                "Whole grain toast with avocado and boiled eggs",
            ],
            &[
                "Quinoa salad with mixed vegetables and chickpeas",
                "Brown rice with dal and steamed vegetables",
                "Whole wheat wrap with hummus, veggies, and tofu",
            ],
            &[
                "Grilled paneer with roasted vegetables",
                "Vegetable stir-fry with tofu and cauliflower rice",
                "Lentil soup with a side salad",
            ],
            &[
                "Greek yogurt with almonds",
                "Apple slices with peanut butter",
                "Mixed nuts and seeds (handful)",
                "Cucumber and carrot sticks with hummus",
            ],
        ),
        FitnessGoal::Maintain => MealPlan::new(
            &[
                "Whole grain cereal with milk and banana",
                "Vegetable poha with peanuts",
                "Smoothie bowl with fruits, granola, and seeds",
            ],
            &[
                "Brown rice with mixed dal and sabzi",
                "Whole wheat roti with paneer curry and salad",
                "Vegetable biryani with raita",
            ],
            &[
                "Grilled vegetables with quinoa",
                "Palak paneer with brown rice",
                "Mixed vegetable curry with roti",
            ],
            &[
                "Fresh fruit salad",
                "Roasted chickpeas",
                "Whole grain crackers with cheese",
                "Protein shake",
            ],
        ),
        FitnessGoal::MuscleGain => MealPlan::new(
            &[
                "Protein pancakes with banana and peanut butter",
                "Scrambled eggs (or tofu scramble) with whole grain toast",
                "Oatmeal with protein powder, nuts, and honey",
            ],
            &[
                "Brown rice with rajma and paneer",
                "Chickpea pasta with vegetables and olive oil",
                "Quinoa bowl with beans, avocado, and tahini",
            ],
            &[
                "Grilled paneer tikka with sweet potato",
                "Lentil curry with brown rice and ghee",
                "Tofu stir-fry with nuts and seeds",
            ],
            &[
                "Protein shake with banana",
                "Peanut butter sandwich on whole grain bread",
                "Greek yogurt with granola and berries",
                "Trail mix with dried fruits and nuts",
            ],
        ),
    }
}

/// Base non-vegetarian plan by goal
fn nonveg_plan(goal: FitnessGoal) -> MealPlan {
    match goal {
        FitnessGoal::WeightLoss => MealPlan::new(
            &[
                "Scrambled eggs with spinach and whole grain toast",
                "Greek yogurt with berries and protein granola",
                "Egg white omelet with vegetables",
            ],
            &[
                "Grilled chicken breast with quinoa and steamed broccoli",
                "Tuna salad with mixed greens and olive oil",
                "Turkey wrap with whole wheat tortilla and veggies",
            ],
            &[
                "Baked salmon with roasted vegetables",
                "Grilled chicken with cauliflower rice",
                "Fish curry with brown rice",
            ],
            &[
                "Boiled eggs",
                "Greek yogurt",
                "Chicken breast strips",
                "Protein shake",
            ],
        ),
        FitnessGoal::Maintain => MealPlan::new(
            &[
                "Egg bhurji with whole wheat roti",
                "Chicken sausage with whole grain toast",
                "Protein smoothie with eggs and fruits",
            ],
            &[
                "Chicken biryani with raita",
                "Fish curry with brown rice",
                "Grilled chicken salad with quinoa",
            ],
            &[
                "Grilled fish with vegetables",
                "Chicken tikka with roti and dal",
                "Mutton curry with brown rice",
            ],
            &[
                "Boiled eggs with nuts",
                "Chicken sandwich",
                "Greek yogurt with honey",
                "Protein bar",
            ],
        ),
        FitnessGoal::MuscleGain => MealPlan::new(
            &[
                "Scrambled eggs (4-5) with whole grain toast and avocado",
                "Protein pancakes with chicken sausage",
                "Egg and cheese omelet with hash browns",
            ],
            &[
                "Grilled chicken breast with sweet potato and vegetables",
                "Beef or chicken with brown rice and beans",
                "Salmon with quinoa and avocado",
            ],
            &[
                "Grilled steak with roasted potatoes",
                "Chicken curry with brown rice and ghee",
                "Fish with pasta and olive oil",
            ],
            &[
                "Protein shake with whole milk",
                "Chicken breast with peanut butter",
                "Boiled eggs (3-4) with nuts",
                "Greek yogurt with granola and honey",
            ],
        ),
    }
}

/// Generate a personalized diet plan
///
/// Base plan by (diet type, goal); Underweight and Obese categories get a
/// portion-guidance note appended to the snack list.
pub fn diet_plan(category: BmiCategory, goal: FitnessGoal, diet_type: DietType) -> MealPlan {
    let mut plan = match diet_type {
        DietType::Veg => veg_plan(goal),
        DietType::NonVeg => nonveg_plan(goal),
    };

    match category {
        BmiCategory::Underweight => plan
            .snacks
            .push("Note: Increase portions for weight gain".to_string()),
        BmiCategory::Obese => plan
            .snacks
            .push("Note: Practice portion control for weight management".to_string()),
        BmiCategory::Normal | BmiCategory::Overweight => {}
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_plan_is_deterministic() {
        let a = exercise_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, ActivityLevel::High);
        let b = exercise_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, ActivityLevel::High);
        assert_eq!(a, b);
    }

    #[test]
    fn test_weight_loss_appends_one_hiit() {
        let base = exercise_plan(BmiCategory::Normal, FitnessGoal::Maintain, ActivityLevel::Moderate);
        let plan = exercise_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, ActivityLevel::Moderate);
        assert_eq!(plan.len(), base.len() + 1);
        let added = plan.last().unwrap();
        assert_eq!(added.workout_type, WorkoutType::Hiit);
        assert_eq!(added.duration, 20);
    }

    #[test]
    fn test_muscle_gain_appends_one_strength() {
        let plan = exercise_plan(BmiCategory::Overweight, FitnessGoal::MuscleGain, ActivityLevel::Moderate);
        let added = plan.last().unwrap();
        assert_eq!(added.workout_type, WorkoutType::Strength);
        assert_eq!(added.duration, 50);
    }

    #[test]
    fn test_low_activity_scales_down_and_tags() {
        let plan = exercise_plan(BmiCategory::Underweight, FitnessGoal::Maintain, ActivityLevel::Low);
        // 45 * 0.7 = 31.5 -> 32
        assert_eq!(plan[0].duration, 32);
        assert!(plan[0].description.starts_with("Beginner level: "));
        // 30 * 0.7 = 21
        assert_eq!(plan[1].duration, 21);
    }

    #[test]
    fn test_high_activity_scales_up_and_tags() {
        let plan = exercise_plan(BmiCategory::Normal, FitnessGoal::Maintain, ActivityLevel::High);
        // 30 * 1.2 = 36
        assert_eq!(plan[0].duration, 36);
        assert!(plan[0].description.starts_with("Advanced level: "));
    }

    #[test]
    fn test_moderate_activity_leaves_durations_unscaled() {
        let plan = exercise_plan(BmiCategory::Normal, FitnessGoal::Maintain, ActivityLevel::Moderate);
        assert_eq!(plan[0].duration, 30);
        assert!(!plan[0].description.contains("level: "));
    }

    #[test]
    fn test_goal_extra_is_scaled_too() {
        let plan = exercise_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, ActivityLevel::High);
        // Appended HIIT entry: 20 * 1.2 = 24
        assert_eq!(plan.last().unwrap().duration, 24);
    }

    #[test]
    fn test_diet_plan_portion_notes() {
        let obese = diet_plan(BmiCategory::Obese, FitnessGoal::Maintain, DietType::Veg);
        assert!(obese.snacks.last().unwrap().contains("portion control"));

        let under = diet_plan(BmiCategory::Underweight, FitnessGoal::Maintain, DietType::Veg);
        assert!(under.snacks.last().unwrap().contains("Increase portions"));

        let normal = diet_plan(BmiCategory::Normal, FitnessGoal::Maintain, DietType::Veg);
        assert!(!normal.snacks.last().unwrap().starts_with("Note:"));
    }

    #[test]
    fn test_diet_plan_respects_diet_type() {
        let veg = diet_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, DietType::Veg);
        let nonveg = diet_plan(BmiCategory::Normal, FitnessGoal::WeightLoss, DietType::NonVeg);
        assert_ne!(veg, nonveg);
        assert!(nonveg.lunch.iter().any(|m| m.contains("chicken")));
    }

    #[test]
    fn test_every_slot_has_options() {
        for goal in [FitnessGoal::WeightLoss, FitnessGoal::Maintain, FitnessGoal::MuscleGain] {
            for diet in [DietType::Veg, DietType::NonVeg] {
                let plan = diet_plan(BmiCategory::Normal, goal, diet);
                assert_eq!(plan.breakfast.len(), 3);
                assert_eq!(plan.lunch.len(), 3);
                assert_eq!(plan.dinner.len(), 3);
                assert_eq!(plan.snacks.len(), 4);
            }
        }
    }
}
