//! Challenge template pools and selection
//!
//! Picks a daily or weekly challenge for a user from the goal's template
//! pool. Obese and Underweight BMI categories short-circuit to fixed
//! adaptations regardless of goal. Selection is the one randomized
//! computation in the system, so the random source is injected: callers
//! pass any `rand::Rng`, tests pass a seeded `StdRng`.

use crate::models::{BmiCategory, FitnessGoal};
use rand::Rng;

/// A generated challenge before persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

const fn t(title: &'static str, description: &'static str) -> ChallengeTemplate {
    ChallengeTemplate { title, description }
}

const DAILY_WEIGHT_LOSS: [ChallengeTemplate; 4] = [
    t(
        "10,000 Steps Challenge",
        "Walk or run 10,000 steps today. Track your progress and stay active throughout the day!",
    ),
    t(
        "20-Minute HIIT Workout",
        "Complete a 20-minute High-Intensity Interval Training session. Push yourself with burpees, jump squats, and mountain climbers!",
    ),
    t(
        "No Sugar Day",
        "Avoid all added sugars today. Opt for natural sweeteners like fruits and stay hydrated!",
    ),
    t(
        "Cardio Blast",
        "Do 30 minutes of continuous cardio - running, cycling, or swimming. Keep your heart rate elevated!",
    ),
];

const DAILY_MUSCLE_GAIN: [ChallengeTemplate; 4] = [
    t(
        "100 Push-ups Challenge",
        "Complete 100 push-ups throughout the day (can be broken into sets). Focus on proper form!",
    ),
    t(
        "50 Squats with Weight",
        "Perform 50 weighted squats today. Use dumbbells or a barbell. Build those legs!",
    ),
    t(
        "Protein Power Day",
        "Consume at least 1.5g of protein per kg of body weight today. Track your protein intake!",
    ),
    t(
        "Upper Body Strength",
        "Complete 5 sets of pull-ups, rows, and shoulder presses. Maximum muscle engagement!",
    ),
];

const DAILY_MAINTAIN: [ChallengeTemplate; 4] = [
    t(
        "Balanced Workout Day",
        "30 minutes cardio + 20 minutes strength training. Keep your fitness balanced!",
    ),
    t(
        "Flexibility Focus",
        "Complete a 30-minute yoga or stretching session. Improve your flexibility and mobility!",
    ),
    t(
        "Hydration Challenge",
        "Drink at least 3 liters of water today. Set reminders and carry a water bottle!",
    ),
    t(
        "Active Recovery",
        "Go for a gentle 45-minute walk or bike ride. Keep moving at a comfortable pace!",
    ),
];

const DAILY_OBESE: ChallengeTemplate = t(
    "Low-Impact Cardio Session",
    "20-30 minutes of low-impact cardio like walking, swimming, or cycling. Listen to your body and maintain a steady pace.",
);

const DAILY_UNDERWEIGHT: ChallengeTemplate = t(
    "Gentle Strength & Flexibility",
    "30 minutes of light resistance training combined with yoga. Focus on building strength gradually.",
);

const WEEKLY_WEIGHT_LOSS: [ChallengeTemplate; 4] = [
    t(
        "5-Day Cardio Streak",
        "Complete at least 30 minutes of cardio for 5 days this week. Track your daily sessions!",
    ),
    t(
        "50,000 Steps This Week",
        "Accumulate 50,000 steps over the next 7 days. Average 7,000+ steps daily!",
    ),
    t(
        "Clean Eating Week",
        "Follow your diet plan strictly for 7 days. No processed foods, track every meal!",
    ),
    t(
        "Calorie Deficit Challenge",
        "Maintain a healthy calorie deficit every day this week. Log all your meals and stay within your target!",
    ),
];

const WEEKLY_MUSCLE_GAIN: [ChallengeTemplate; 4] = [
    t(
        "500 Push-ups This Week",
        "Complete 500 total push-ups across 7 days. Break into manageable sets daily!",
    ),
    t(
        "Progressive Overload Week",
        "Increase your weights by 5-10% on all strength exercises this week. Track your progress!",
    ),
    t(
        "Protein-Packed Week",
        "Hit your daily protein target (1.6g/kg body weight) for all 7 days. Meal prep is key!",
    ),
    t(
        "Full Body Split",
        "Complete 4 full-body strength training sessions this week with progressive resistance!",
    ),
];

const WEEKLY_MAINTAIN: [ChallengeTemplate; 4] = [
    t(
        "Balanced Week Challenge",
        "Complete 3 cardio sessions and 2 strength sessions this week. Keep your routine balanced!",
    ),
    t(
        "Daily Movement Streak",
        "Be active for at least 30 minutes every single day for 7 days. No rest days!",
    ),
    t(
        "Mindful Eating Week",
        "Practice portion control and mindful eating for 7 consecutive days. No distractions during meals!",
    ),
    t(
        "Flexibility & Strength",
        "Alternate between yoga/stretching and strength training for 6 sessions this week!",
    ),
];

const WEEKLY_OBESE: ChallengeTemplate = t(
    "Consistency Week",
    "Complete at least 20 minutes of low-impact exercise for 5 days this week. Build a sustainable routine!",
);

const WEEKLY_UNDERWEIGHT: ChallengeTemplate = t(
    "Strength Building Week",
    "Complete 4 light resistance training sessions this week. Focus on form and gradual progression!",
);

/// Daily template pool for a goal
pub fn daily_pool(goal: FitnessGoal) -> &'static [ChallengeTemplate; 4] {
    match goal {
        FitnessGoal::WeightLoss => &DAILY_WEIGHT_LOSS,
        FitnessGoal::MuscleGain => &DAILY_MUSCLE_GAIN,
        FitnessGoal::Maintain => &DAILY_MAINTAIN,
    }
}

/// Weekly template pool for a goal
pub fn weekly_pool(goal: FitnessGoal) -> &'static [ChallengeTemplate; 4] {
    match goal {
        FitnessGoal::WeightLoss => &WEEKLY_WEIGHT_LOSS,
        FitnessGoal::MuscleGain => &WEEKLY_MUSCLE_GAIN,
        FitnessGoal::Maintain => &WEEKLY_MAINTAIN,
    }
}

/// Generate a daily challenge for a user's BMI category and goal
pub fn generate_daily<R: Rng + ?Sized>(
    category: BmiCategory,
    goal: FitnessGoal,
    rng: &mut R,
) -> ChallengeTemplate {
    match category {
        BmiCategory::Obese => DAILY_OBESE,
        BmiCategory::Underweight => DAILY_UNDERWEIGHT,
        BmiCategory::Normal | BmiCategory::Overweight => {
            let pool = daily_pool(goal);
            pool[rng.gen_range(0..pool.len())]
        }
    }
}

/// Generate a weekly challenge for a user's BMI category and goal
pub fn generate_weekly<R: Rng + ?Sized>(
    category: BmiCategory,
    goal: FitnessGoal,
    rng: &mut R,
) -> ChallengeTemplate {
    match category {
        BmiCategory::Obese => WEEKLY_OBESE,
        BmiCategory::Underweight => WEEKLY_UNDERWEIGHT,
        BmiCategory::Normal | BmiCategory::Overweight => {
            let pool = weekly_pool(goal);
            pool[rng.gen_range(0..pool.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_daily_pick_is_member_of_goal_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = generate_daily(BmiCategory::Normal, FitnessGoal::WeightLoss, &mut rng);
            assert!(DAILY_WEIGHT_LOSS.contains(&picked));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = generate_daily(
            BmiCategory::Normal,
            FitnessGoal::Maintain,
            &mut StdRng::seed_from_u64(42),
        );
        let b = generate_daily(
            BmiCategory::Normal,
            FitnessGoal::Maintain,
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_obese_overrides_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        for goal in [FitnessGoal::WeightLoss, FitnessGoal::Maintain, FitnessGoal::MuscleGain] {
            assert_eq!(generate_daily(BmiCategory::Obese, goal, &mut rng), DAILY_OBESE);
            assert_eq!(generate_weekly(BmiCategory::Obese, goal, &mut rng), WEEKLY_OBESE);
        }
    }

    #[test]
    fn test_underweight_overrides_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_daily(BmiCategory::Underweight, FitnessGoal::WeightLoss, &mut rng),
            DAILY_UNDERWEIGHT
        );
        assert_eq!(
            generate_weekly(BmiCategory::Underweight, FitnessGoal::MuscleGain, &mut rng),
            WEEKLY_UNDERWEIGHT
        );
    }

    #[test]
    fn test_all_pool_entries_reachable() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let picked = generate_weekly(BmiCategory::Overweight, FitnessGoal::Maintain, &mut rng);
            seen.insert(picked.title);
        }
        assert_eq!(seen.len(), WEEKLY_MAINTAIN.len());
    }
}
